//! The Siren wire document: properties, class tags, links, actions, and
//! embedded sub-entities.
//!
//! Every field of [`Document`] is defaulted, so deserializing `{}` (or
//! building one by hand in a test) is total: collections come back empty,
//! never absent. Optional fields on [`Link`], [`Action`], and [`Field`]
//! stay optional so a round-trip does not invent keys the server never
//! sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One Siren entity document, as served by the API.
///
/// `rel` is only meaningful when the document is embedded in a parent's
/// `entities` list. `href` may be empty even for a self-describing
/// document; resolve the canonical URL through a `self`-rel link instead
/// (see [`Entity::self_href`](crate::core::entity::Entity::self_href)).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub class: Vec<String>,
    pub properties: Map<String, Value>,
    pub entities: Vec<Document>,
    pub links: Vec<Link>,
    pub actions: Vec<Action>,
    pub title: String,
    pub href: String,
    pub rel: Vec<String>,
}

/// A navigational pointer to a related resource, tagged with one or more
/// relation types.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub rel: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<String>>,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Link {
            rel: vec![rel.into()],
            href: href.into(),
            ..Link::default()
        }
    }

    pub(crate) fn classes(&self) -> &[String] {
        self.class.as_deref().unwrap_or(&[])
    }
}

/// A state transition the client may invoke: method, target, and the
/// fields the server expects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub href: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Action {
    /// HTTP method for this action, uppercased, `GET` when unspecified.
    pub fn request_method(&self) -> String {
        self.method.as_deref().unwrap_or("GET").to_ascii_uppercase()
    }

    /// Payload encoding name for this action, `form` when unspecified.
    pub fn encoding(&self) -> &str {
        self.kind.as_deref().unwrap_or("form")
    }

    pub(crate) fn classes(&self) -> &[String] {
        self.class.as_deref().unwrap_or(&[])
    }
}

/// One input field of an [`Action`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_total() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.class.is_empty());
        assert!(doc.properties.is_empty());
        assert!(doc.entities.is_empty());
        assert!(doc.links.is_empty());
        assert!(doc.actions.is_empty());
        assert_eq!(doc.title, "");
        assert_eq!(doc.href, "");
        assert!(doc.rel.is_empty());
    }

    #[test]
    fn test_document_deserializes_nested() {
        let doc: Document = serde_json::from_value(json!({
            "class": ["order"],
            "properties": { "id": 42 },
            "entities": [{ "rel": ["item"], "title": "line" }],
            "links": [{ "rel": ["self"], "href": "/orders/42" }],
            "actions": [{ "name": "cancel", "method": "DELETE", "href": "/orders/42" }]
        }))
        .unwrap();

        assert_eq!(doc.class, vec!["order"]);
        assert_eq!(doc.properties["id"], json!(42));
        assert_eq!(doc.entities[0].rel, vec!["item"]);
        assert_eq!(doc.links[0].href, "/orders/42");
        assert_eq!(doc.actions[0].name, "cancel");
    }

    #[test]
    fn test_action_type_field_renamed() {
        let action: Action = serde_json::from_value(json!({
            "name": "create",
            "href": "/items",
            "type": "application/json"
        }))
        .unwrap();

        assert_eq!(action.kind.as_deref(), Some("application/json"));

        let back = serde_json::to_value(&action).unwrap();
        assert_eq!(back["type"], "application/json");
    }

    #[test]
    fn test_action_method_default() {
        let action = Action {
            href: "/search".into(),
            ..Action::default()
        };
        assert_eq!(action.request_method(), "GET");
        assert_eq!(action.encoding(), "form");
    }

    #[test]
    fn test_action_method_uppercased() {
        let action = Action {
            method: Some("post".into()),
            ..Action::default()
        };
        assert_eq!(action.request_method(), "POST");
    }

    #[test]
    fn test_link_absent_options_not_serialized() {
        let link = Link::new("self", "/");
        let value = serde_json::to_value(&link).unwrap();
        assert!(value.get("class").is_none());
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_document_serializes_defaulted_fields() {
        let value = serde_json::to_value(Document::default()).unwrap();
        for key in [
            "class",
            "properties",
            "entities",
            "links",
            "actions",
            "title",
            "href",
            "rel",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
