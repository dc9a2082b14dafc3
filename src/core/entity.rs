//! The queryable wrapper around one Siren document.

use crate::core::types::{Action, Document, Field, Link, Search};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A Siren resource entity. Wraps one response [`Document`] and exposes
/// lookups for links, actions, and embedded entities by rel, class, name,
/// or arbitrary predicate.
///
/// The wrapped document is immutable: construction takes ownership, every
/// accessor returns an owned value, and nothing handed out aliases the
/// internal state. Mutating a returned value never changes what the next
/// call observes.
///
/// Lookup misses are not errors: singular lookups return `None`, plural
/// lookups return an empty `Vec`.
///
/// # Examples
///
/// ```
/// use siren_rs::{Criteria, Document, Entity, Link};
///
/// let entity = Entity::new(Document {
///     links: vec![Link::new("self", "/orders/42")],
///     ..Document::default()
/// });
///
/// assert_eq!(entity.link("self").map(|l| l.href), Some("/orders/42".into()));
/// assert!(entity.link(Criteria::new().with_class("missing")).is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    data: Arc<Document>,
}

impl Entity {
    /// Wrap a document. Taking ownership is the defensive copy: the
    /// caller keeps no handle into the wrapped value.
    pub fn new(data: Document) -> Self {
        Entity {
            data: Arc::new(data),
        }
    }

    pub fn title(&self) -> String {
        self.data.title.clone()
    }

    pub fn href(&self) -> String {
        self.data.href.clone()
    }

    pub fn class(&self) -> Vec<String> {
        self.data.class.clone()
    }

    /// Relation tags of this document with respect to its parent; empty
    /// unless this entity was embedded in another entity's `entities`.
    pub fn rel(&self) -> Vec<String> {
        self.data.rel.clone()
    }

    pub fn properties(&self) -> Map<String, Value> {
        self.data.properties.clone()
    }

    /// First link satisfying `search`, or `None`.
    pub fn link(&self, search: impl Into<Search<Link>>) -> Option<Link> {
        let search = search.into();
        self.data
            .links
            .iter()
            .enumerate()
            .find(|(x, link)| search.matches(link, *x))
            .map(|(_, link)| link.clone())
    }

    /// All links satisfying `search`, in document order.
    pub fn links(&self, search: impl Into<Search<Link>>) -> Vec<Link> {
        let search = search.into();
        self.data
            .links
            .iter()
            .enumerate()
            .filter(|(x, link)| search.matches(link, *x))
            .map(|(_, link)| link.clone())
            .collect()
    }

    /// First embedded sub-entity satisfying `search`, wrapped as a fresh
    /// `Entity`, or `None`.
    pub fn entity(&self, search: impl Into<Search<Document>>) -> Option<Entity> {
        let search = search.into();
        self.data
            .entities
            .iter()
            .enumerate()
            .find(|(x, doc)| search.matches(doc, *x))
            .map(|(_, doc)| Entity::new(doc.clone()))
    }

    /// All embedded sub-entities satisfying `search`, each wrapped as a
    /// fresh `Entity`, in document order. Two calls never share wrapper
    /// instances.
    pub fn entities(&self, search: impl Into<Search<Document>>) -> Vec<Entity> {
        let search = search.into();
        self.data
            .entities
            .iter()
            .enumerate()
            .filter(|(x, doc)| search.matches(doc, *x))
            .map(|(_, doc)| Entity::new(doc.clone()))
            .collect()
    }

    /// First action satisfying `search`, or `None`.
    pub fn action(&self, search: impl Into<Search<Action>>) -> Option<Action> {
        let search = search.into();
        self.data
            .actions
            .iter()
            .enumerate()
            .find(|(x, action)| search.matches(action, *x))
            .map(|(_, action)| action.clone())
    }

    /// All actions satisfying `search`, in document order.
    pub fn actions(&self, search: impl Into<Search<Action>>) -> Vec<Action> {
        let search = search.into();
        self.data
            .actions
            .iter()
            .enumerate()
            .filter(|(x, action)| search.matches(action, *x))
            .map(|(_, action)| action.clone())
            .collect()
    }

    /// First field of `action` satisfying `search`, or `None` when the
    /// action has no fields or none match.
    pub fn field(&self, action: &Action, search: impl Into<Search<Field>>) -> Option<Field> {
        let search = search.into();
        action
            .fields
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .find(|(x, field)| search.matches(field, *x))
            .map(|(_, field)| field.clone())
    }

    /// The `self`-rel link, the portable way to locate this entity's
    /// canonical URL regardless of whether `href` was populated.
    pub fn self_link(&self) -> Option<Link> {
        self.link("self")
    }

    pub fn self_href(&self) -> Option<String> {
        self.self_link().map(|link| link.href)
    }

    /// A serializable copy of the full underlying document.
    pub fn to_document(&self) -> Document {
        (*self.data).clone()
    }
}

impl From<Document> for Entity {
    fn from(data: Document) -> Self {
        Entity::new(data)
    }
}
