//! Client protocol integration tests, driven through a recording mock
//! transport: request shaping, the content-type gate, redirect
//! resolution, and callback/event ordering.

use async_trait::async_trait;
use serde_json::json;
use siren_rs::{
    Action, ClientConfig, ClientEvent, Link, SirenClient, SirenError, SirenRequest, SirenResponse,
    SirenTransport, SIREN_MEDIA_TYPE,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Builds a well-formed Siren response for the given body.
fn siren(body: &str) -> SirenResponse {
    SirenResponse::new(200, body.to_string()).with_header("Content-Type", SIREN_MEDIA_TYPE)
}

/// Transport double: records every request and replays scripted
/// responses. With nothing scripted it answers an empty Siren document at
/// the requested URL.
#[derive(Default)]
struct MockTransport {
    requests: Mutex<Vec<SirenRequest>>,
    responses: Mutex<VecDeque<siren_rs::Result<SirenResponse>>>,
}

impl MockTransport {
    fn push(&self, response: siren_rs::Result<SirenResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn requests(&self) -> Vec<SirenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SirenTransport for MockTransport {
    async fn execute(&self, request: SirenRequest) -> siren_rs::Result<SirenResponse> {
        let scripted = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(siren("{}")));
        self.requests.lock().unwrap().push(request.clone());
        scripted.map(|mut response| {
            if response.url.is_empty() {
                response.url = request.url;
            }
            response
        })
    }
}

fn client() -> (SirenClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::default());
    let client = SirenClient::with_transport(transport.clone(), ClientConfig::default());
    (client, transport)
}

#[tokio::test]
async fn follow_issues_get_with_accept_header() {
    let (client, transport) = client();

    let fetched = client.follow("/1").await.unwrap();
    assert_eq!(fetched.href, "/1");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/1");
    assert_eq!(requests[0].header("accept"), Some(SIREN_MEDIA_TYPE));
    assert!(!requests[0].has_body());
}

#[tokio::test]
async fn follow_passes_body_to_entity() {
    let (client, transport) = client();
    transport.push(Ok(siren(r#"{"title":"Hello World"}"#)));

    let fetched = client.follow("/4").await.unwrap();
    assert_eq!(fetched.entity.title(), "Hello World");
}

#[tokio::test]
async fn follow_accepts_link_records() {
    let (client, transport) = client();

    client.follow(&Link::new("item", "/8")).await.unwrap();
    client
        .follow(Link {
            rel: vec!["next".into()],
            href: "/9".into(),
            ..Link::default()
        })
        .await
        .unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec!["/8", "/9"]);
}

#[tokio::test]
async fn get_is_the_entry_point_form_of_follow() {
    let (client, transport) = client();

    client.get("/entry").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/entry");
}

#[tokio::test]
async fn wrong_content_type_is_an_error_even_on_200() {
    let (client, transport) = client();
    let events = client.events();
    transport.push(Ok(SirenResponse::new(200, r#"{"title":"X"}"#)
        .with_header("Content-Type", "application/json")));

    let err = client.follow("/2").await.unwrap_err();
    assert_eq!(err, SirenError::ContentType(Some("application/json".into())));
    assert!(err.is_protocol());

    // Only an error notification, never an entity.
    match events.try_next() {
        Some(ClientEvent::Error { error, href }) => {
            assert!(error.is_protocol());
            assert_eq!(href.as_deref(), Some("/2"));
        }
        other => panic!("expected an error event, got {other:?}"),
    }
    assert!(events.try_next().is_none());
}

#[tokio::test]
async fn charset_parameter_does_not_fail_the_gate() {
    let (client, transport) = client();
    transport.push(Ok(SirenResponse::new(200, "{}")
        .with_header("Content-Type", "application/vnd.siren+json; charset=utf-8")));

    assert!(client.follow("/1").await.is_ok());
}

#[tokio::test]
async fn transport_failure_reports_through_the_same_channel() {
    let (client, transport) = client();
    let events = client.events();
    transport.push(Err(SirenError::Http("connection refused".into())));

    let err = client.follow("/down").await.unwrap_err();
    assert!(err.is_transport());

    match events.try_next() {
        Some(ClientEvent::Error { error, href }) => {
            assert!(error.is_transport());
            assert_eq!(href.as_deref(), Some("/down"));
        }
        other => panic!("expected an error event, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_is_a_transport_path_error() {
    let (client, transport) = client();
    transport.push(Ok(siren("not json")));

    let err = client.follow("/1").await.unwrap_err();
    assert!(matches!(err, SirenError::BodyParse(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn submit_get_encodes_data_as_query() {
    let (client, transport) = client();
    let action = Action {
        href: "/search".into(),
        ..Action::default()
    };

    client.submit(&action, json!({"terms": "test"})).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/search?terms=test");
    assert!(!requests[0].has_body());
}

#[tokio::test]
async fn submit_get_keeps_existing_query() {
    let (client, transport) = client();
    let action = Action {
        href: "/search?page=2".into(),
        ..Action::default()
    };

    client.submit(&action, json!({"terms": "test"})).await.unwrap();

    assert_eq!(transport.requests()[0].url, "/search?page=2&terms=test");
}

#[tokio::test]
async fn submit_post_sends_form_encoded_body() {
    let (client, transport) = client();
    let action = Action {
        href: "/create".into(),
        method: Some("post".into()),
        ..Action::default()
    };

    client.submit(&action, json!({"terms": "test"})).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/create");
    assert_eq!(
        requests[0].header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(requests[0].body_str(), Some("terms=test"));
}

#[tokio::test]
async fn submit_json_action_sends_json_body() {
    let (client, transport) = client();
    let action = Action {
        href: "/items".into(),
        method: Some("POST".into()),
        kind: Some("application/json".into()),
        ..Action::default()
    };

    client.submit(&action, json!({"terms": "test"})).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    assert_eq!(requests[0].body_str(), Some(r#"{"terms":"test"}"#));
}

#[tokio::test]
async fn submit_response_becomes_the_new_entity() {
    let (client, transport) = client();
    transport.push(Ok(siren(r#"{"title":"Hello World"}"#)));
    let action = Action {
        href: "/search".into(),
        ..Action::default()
    };

    let fetched = client.submit(&action, json!({"terms": "test"})).await.unwrap();
    assert_eq!(fetched.entity.title(), "Hello World");
}

#[tokio::test]
async fn success_reports_the_post_redirect_url() {
    let (client, transport) = client();
    let events = client.events();
    transport.push(Ok(siren("{}").with_url("/new")));

    let fetched = client.follow("/old").await.unwrap();
    assert_eq!(fetched.href, "/new");

    match events.try_next() {
        Some(ClientEvent::Entity { href, .. }) => assert_eq!(href, "/new"),
        other => panic!("expected an entity event, got {other:?}"),
    }
}

#[tokio::test]
async fn callback_observes_success_before_subscribers() {
    let (client, _transport) = client();
    let events = Arc::new(client.events());
    let callback_ran_first = Arc::new(AtomicBool::new(false));

    let (events_in_cb, flag) = (events.clone(), callback_ran_first.clone());
    let fetched = client
        .follow_with("/1", move |outcome| {
            assert!(outcome.is_ok());
            // no event may have reached the subscriber yet
            flag.store(events_in_cb.try_next().is_none(), Ordering::SeqCst);
        })
        .await
        .unwrap();

    assert_eq!(fetched.href, "/1");
    assert!(callback_ran_first.load(Ordering::SeqCst));
    assert!(matches!(events.try_next(), Some(ClientEvent::Entity { .. })));
}

#[tokio::test]
async fn callback_observes_error_before_subscribers() {
    let (client, transport) = client();
    transport.push(Ok(
        SirenResponse::new(200, "{}").with_header("Content-Type", "application/json")
    ));
    let events = Arc::new(client.events());
    let callback_ran_first = Arc::new(AtomicBool::new(false));

    let (events_in_cb, flag) = (events.clone(), callback_ran_first.clone());
    let outcome = client
        .follow_with("/6", move |outcome| {
            assert!(outcome.is_err());
            flag.store(events_in_cb.try_next().is_none(), Ordering::SeqCst);
        })
        .await;

    assert!(outcome.is_err());
    assert!(callback_ran_first.load(Ordering::SeqCst));
    assert!(matches!(events.try_next(), Some(ClientEvent::Error { .. })));
}

#[tokio::test]
async fn submit_with_fires_callback() {
    let (client, _transport) = client();
    let fired = Arc::new(AtomicBool::new(false));
    let flag = fired.clone();

    let action = Action {
        href: "/search".into(),
        ..Action::default()
    };
    client
        .submit_with(&action, json!({}), move |outcome| {
            assert!(outcome.is_ok());
            flag.store(true, Ordering::SeqCst);
        })
        .await
        .unwrap();

    assert!(fired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn every_subscriber_receives_each_completion() {
    let (client, _transport) = client();
    let first = client.events();
    let second = client.events();

    client.follow("/1").await.unwrap();

    assert!(matches!(first.try_next(), Some(ClientEvent::Entity { .. })));
    assert!(matches!(second.try_next(), Some(ClientEvent::Entity { .. })));
}

#[tokio::test]
async fn dropped_subscriber_stops_receiving() {
    let (client, _transport) = client();
    let kept = client.events();
    drop(client.events());

    client.follow("/1").await.unwrap();
    client.follow("/2").await.unwrap();

    assert!(kept.try_next().is_some());
    assert!(kept.try_next().is_some());
    assert!(kept.try_next().is_none());
}

#[tokio::test]
async fn completions_follow_network_order() {
    let (client, transport) = client();
    let events = client.events();
    transport.push(Ok(siren(r#"{"title":"first"}"#)));
    transport.push(Ok(siren(r#"{"title":"second"}"#)));

    client.follow("/a").await.unwrap();
    client.follow("/b").await.unwrap();

    let titles: Vec<String> = std::iter::from_fn(|| events.try_next())
        .map(|event| match event {
            ClientEvent::Entity { entity, .. } => entity.title(),
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(titles, vec!["first", "second"]);
}
