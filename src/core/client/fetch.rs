//! Main Siren client implementation.
//!
//! Provides the primary `SirenClient` for navigating a Siren API: follow
//! links, submit actions, and receive the resulting entities.

use crate::core::client::config::ClientConfig;
use crate::core::client::events::{ClientEvent, EventBus, EventStream};
use crate::core::client::native_transport::NativeTransport;
use crate::core::entity::Entity;
use crate::core::error::{Result, SirenError};
use crate::core::protocol::{self, encoding};
use crate::core::traits::SirenTransport;
use crate::core::types::{Action, Document, Link, SirenRequest};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of a successful navigation: the new entity and the resolved
/// (post-redirect) URL it was served from. Subsequent relative navigation
/// anchors at `href`, not at the originally requested URL.
#[derive(Clone, Debug)]
pub struct Fetched {
    pub entity: Entity,
    pub href: String,
}

/// Target of a [`SirenClient::follow`] call: a bare href, or anything
/// link-shaped with an `href` of its own.
#[derive(Clone, Debug)]
pub enum FollowTarget {
    Href(String),
    Link(Link),
}

impl FollowTarget {
    fn into_href(self) -> String {
        match self {
            FollowTarget::Href(href) => href,
            FollowTarget::Link(link) => link.href,
        }
    }
}

impl From<&str> for FollowTarget {
    fn from(href: &str) -> Self {
        FollowTarget::Href(href.to_string())
    }
}

impl From<String> for FollowTarget {
    fn from(href: String) -> Self {
        FollowTarget::Href(href)
    }
}

impl From<Link> for FollowTarget {
    fn from(link: Link) -> Self {
        FollowTarget::Link(link)
    }
}

impl From<&Link> for FollowTarget {
    fn from(link: &Link) -> Self {
        FollowTarget::Link(link.clone())
    }
}

/// One-shot completion callback, invoked with the outcome before the
/// matching event reaches any subscriber.
pub type Completion = Box<dyn FnOnce(&Result<Fetched>) + Send>;

/// A Siren API client. Notifies the caller through two channels per
/// navigation, in a fixed order:
///
/// 1. the optional one-shot completion callback
///    ([`follow_with`](SirenClient::follow_with) /
///    [`submit_with`](SirenClient::submit_with)),
/// 2. a [`ClientEvent`] delivered to every stream obtained from
///    [`events`](SirenClient::events): `Entity` after a retrieval,
///    `Error` after a failure.
///
/// Each invocation reports exactly once; failures surface through this
/// path and the returned `Result`, never as a panic or an early synchronous
/// throw. Clones share the transport, configuration, and subscriber
/// registry, and concurrent in-flight navigations do not interfere.
#[derive(Clone)]
pub struct SirenClient {
    transport: Arc<dyn SirenTransport>,
    config: Arc<ClientConfig>,
    events: Arc<EventBus>,
}

impl SirenClient {
    /// Create a client with the native transport and default
    /// configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with the native transport and custom
    /// configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = Arc::new(NativeTransport::from_config(&config));
        Self::with_transport(transport, config)
    }

    /// Create a client over an arbitrary transport. This is the seam
    /// tests drive the protocol through.
    pub fn with_transport(transport: Arc<dyn SirenTransport>, config: ClientConfig) -> Self {
        SirenClient {
            transport,
            config: Arc::new(config),
            events: Arc::new(EventBus::default()),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Subscribe to entity/error notifications. Dropping the stream
    /// unsubscribes.
    pub fn events(&self) -> EventStream {
        self.events.subscribe()
    }

    /// Fetch the entry-point resource. Same operation as
    /// [`follow`](SirenClient::follow).
    pub async fn get(&self, href: &str) -> Result<Fetched> {
        self.follow(href).await
    }

    /// Follow a link (or bare href) with a GET request and deliver the
    /// response entity.
    pub async fn follow(&self, target: impl Into<FollowTarget>) -> Result<Fetched> {
        self.dispatch(Ok(Self::follow_request(target.into())), None)
            .await
    }

    /// [`follow`](SirenClient::follow), plus a one-shot callback that
    /// observes the outcome before any event subscriber does.
    pub async fn follow_with<F>(
        &self,
        target: impl Into<FollowTarget>,
        on_complete: F,
    ) -> Result<Fetched>
    where
        F: FnOnce(&Result<Fetched>) + Send + 'static,
    {
        self.dispatch(
            Ok(Self::follow_request(target.into())),
            Some(Box::new(on_complete)),
        )
        .await
    }

    /// Submit an action. `data` must serialize to an object of field
    /// values; it travels as query parameters for GET actions and as a
    /// form- or JSON-encoded body otherwise, per the action's declared
    /// type.
    pub async fn submit(&self, action: &Action, data: impl Serialize) -> Result<Fetched> {
        self.dispatch(Self::submit_request(action, data), None).await
    }

    /// [`submit`](SirenClient::submit), plus a one-shot callback that
    /// observes the outcome before any event subscriber does.
    pub async fn submit_with<F>(
        &self,
        action: &Action,
        data: impl Serialize,
        on_complete: F,
    ) -> Result<Fetched>
    where
        F: FnOnce(&Result<Fetched>) + Send + 'static,
    {
        self.dispatch(Self::submit_request(action, data), Some(Box::new(on_complete)))
            .await
    }

    fn follow_request(target: FollowTarget) -> SirenRequest {
        SirenRequest::get(target.into_href())
            .with_header("Accept", protocol::SIREN_MEDIA_TYPE)
    }

    fn submit_request(action: &Action, data: impl Serialize) -> Result<SirenRequest> {
        let data = serde_json::to_value(data).map_err(|e| SirenError::Encode(e.to_string()))?;
        let method = action.request_method();

        let request = if method == "GET" {
            SirenRequest::new(method, encoding::append_query(&action.href, &data)?)
        } else if protocol::media_type_essence(action.encoding()) == encoding::JSON_MEDIA_TYPE {
            SirenRequest::new(method, &action.href)
                .with_header("Content-Type", encoding::JSON_MEDIA_TYPE)
                .with_body(serde_json::to_vec(&data).map_err(|e| SirenError::Encode(e.to_string()))?)
        } else {
            SirenRequest::new(method, &action.href)
                .with_header("Content-Type", encoding::FORM_MEDIA_TYPE)
                .with_body(encoding::form_body(&data)?)
        };

        Ok(request.with_header("Accept", protocol::SIREN_MEDIA_TYPE))
    }

    /// Run one navigation and report it exactly once: callback first,
    /// then the event, then the returned outcome.
    async fn dispatch(
        &self,
        request: Result<SirenRequest>,
        on_complete: Option<Completion>,
    ) -> Result<Fetched> {
        let (outcome, href) = match request {
            Ok(request) => {
                let href = request.url.clone();
                (self.execute(request).await, Some(href))
            }
            Err(err) => (Err(err), None),
        };

        if let Some(on_complete) = on_complete {
            on_complete(&outcome);
        }

        match &outcome {
            Ok(fetched) => self.events.emit(ClientEvent::Entity {
                entity: fetched.entity.clone(),
                href: fetched.href.clone(),
            }),
            Err(error) => self.events.emit(ClientEvent::Error {
                error: error.clone(),
                href,
            }),
        }

        outcome
    }

    /// One exchange: transport, media-type gate, entity construction.
    async fn execute(&self, request: SirenRequest) -> Result<Fetched> {
        if self.config.enable_logging {
            tracing::debug!(method = %request.method, url = %request.url, "issuing request");
        }

        let response = self.transport.execute(request).await?;

        if self.config.enable_logging {
            tracing::debug!(status = response.status, url = %response.url, "response received");
        }

        if let Err(err) = protocol::validate(&response) {
            if self.config.enable_logging {
                tracing::warn!(url = %response.url, error = %err, "rejected non-siren response");
            }
            return Err(err);
        }

        let document: Document = serde_json::from_slice(&response.body)?;

        Ok(Fetched {
            entity: Entity::new(document),
            href: response.url,
        })
    }
}

impl Default for SirenClient {
    fn default() -> Self {
        Self::new()
    }
}
