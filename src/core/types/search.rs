//! Search criteria and the matching rules shared by link, sub-entity,
//! action, and field lookups.
//!
//! A lookup criterion is one of four cases, modeled by [`Search`]:
//!
//! - [`Search::Any`]: no filtering, matches every record.
//! - [`Search::Tag`]: a bare string, matched as a `rel` tag for links and
//!   sub-entities and as an exact `name` for actions and fields.
//! - [`Search::Where`]: structured [`Criteria`]; `rel`/`name` is checked
//!   before `class`, and the first key present on the criteria decides the
//!   match on its own.
//! - [`Search::Predicate`]: an arbitrary test receiving the candidate
//!   record and its zero-based position in the source collection.
//!
//! Multi-valued `rel`/`class` criteria use subset semantics: every wanted
//! value must appear in the record's collection, which may hold more.

use crate::core::types::document::{Action, Document, Field, Link};
use std::fmt;

/// Boxed predicate over a record and its position in the source
/// collection.
pub type SearchFn<T> = Box<dyn Fn(&T, usize) -> bool + Send + Sync>;

/// A lookup criterion for one record kind.
pub enum Search<T> {
    /// Match every record.
    Any,
    /// Match a `rel` tag (links, sub-entities) or an exact `name`
    /// (actions, fields).
    Tag(String),
    /// Match structured [`Criteria`].
    Where(Criteria),
    /// Match records the predicate accepts.
    Predicate(SearchFn<T>),
}

impl<T> Search<T> {
    pub fn tag(tag: impl Into<String>) -> Self {
        Search::Tag(tag.into())
    }

    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&T, usize) -> bool + Send + Sync + 'static,
    {
        Search::Predicate(Box::new(test))
    }
}

impl<T: Matchable> Search<T> {
    /// Whether `record`, at `index` in its source collection, satisfies
    /// this criterion.
    pub fn matches(&self, record: &T, index: usize) -> bool {
        match self {
            Search::Any => true,
            Search::Tag(tag) => record.matches_tag(tag),
            Search::Where(criteria) => record.matches_criteria(criteria),
            Search::Predicate(test) => test(record, index),
        }
    }
}

impl<T> fmt::Debug for Search<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Search::Any => f.write_str("Search::Any"),
            Search::Tag(tag) => f.debug_tuple("Search::Tag").field(tag).finish(),
            Search::Where(criteria) => f.debug_tuple("Search::Where").field(criteria).finish(),
            Search::Predicate(_) => f.write_str("Search::Predicate(..)"),
        }
    }
}

impl<T> From<&str> for Search<T> {
    fn from(tag: &str) -> Self {
        Search::Tag(tag.to_string())
    }
}

impl<T> From<String> for Search<T> {
    fn from(tag: String) -> Self {
        Search::Tag(tag)
    }
}

impl<T> From<Criteria> for Search<T> {
    fn from(criteria: Criteria) -> Self {
        Search::Where(criteria)
    }
}

/// Structured lookup criteria.
///
/// Built with consuming `with_*` methods; each call to [`with_rel`] /
/// [`with_class`] appends one value, so a scalar criterion is just a
/// single-element list.
///
/// [`with_rel`]: Criteria::with_rel
/// [`with_class`]: Criteria::with_class
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    pub rel: Option<Vec<String>>,
    pub name: Option<String>,
    pub class: Option<Vec<String>>,
}

impl Criteria {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel.get_or_insert_with(Vec::new).push(rel.into());
        self
    }

    pub fn with_rels<I, S>(mut self, rels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel
            .get_or_insert_with(Vec::new)
            .extend(rels.into_iter().map(Into::into));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class.get_or_insert_with(Vec::new).push(class.into());
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class
            .get_or_insert_with(Vec::new)
            .extend(classes.into_iter().map(Into::into));
        self
    }
}

/// How a record kind exposes its matchable values to [`Search`].
pub trait Matchable {
    /// Whether the bare-string criterion matches this record.
    fn matches_tag(&self, tag: &str) -> bool;

    /// Whether structured criteria match this record. The first key
    /// present on the criteria that applies to this record kind decides;
    /// criteria with no applicable key match nothing.
    fn matches_criteria(&self, criteria: &Criteria) -> bool;
}

/// Subset test: every wanted value appears somewhere in `have`.
fn contains_all(have: &[String], want: &[String]) -> bool {
    want.iter().all(|w| have.iter().any(|h| h == w))
}

impl Matchable for Link {
    fn matches_tag(&self, tag: &str) -> bool {
        self.rel.iter().any(|r| r == tag)
    }

    fn matches_criteria(&self, criteria: &Criteria) -> bool {
        if let Some(rel) = &criteria.rel {
            return contains_all(&self.rel, rel);
        }
        if let Some(class) = &criteria.class {
            return contains_all(self.classes(), class);
        }
        false
    }
}

impl Matchable for Document {
    fn matches_tag(&self, tag: &str) -> bool {
        self.rel.iter().any(|r| r == tag)
    }

    fn matches_criteria(&self, criteria: &Criteria) -> bool {
        if let Some(rel) = &criteria.rel {
            return contains_all(&self.rel, rel);
        }
        if let Some(class) = &criteria.class {
            return contains_all(&self.class, class);
        }
        false
    }
}

impl Matchable for Action {
    fn matches_tag(&self, tag: &str) -> bool {
        self.name == tag
    }

    fn matches_criteria(&self, criteria: &Criteria) -> bool {
        if let Some(name) = &criteria.name {
            return &self.name == name;
        }
        if let Some(class) = &criteria.class {
            return contains_all(self.classes(), class);
        }
        false
    }
}

impl Matchable for Field {
    fn matches_tag(&self, tag: &str) -> bool {
        self.name == tag
    }

    fn matches_criteria(&self, criteria: &Criteria) -> bool {
        if let Some(name) = &criteria.name {
            return &self.name == name;
        }
        false
    }
}
