//! siren_rs: a client for Siren hypermedia APIs.
//!
//! Siren servers answer every request with an entity document: properties,
//! classification tags, navigational links, embedded sub-entities, and the
//! actions the client may invoke next. This crate retrieves those
//! documents, verifies the response really is Siren
//! (`application/vnd.siren+json`), wraps it in a queryable [`Entity`], and
//! lets application code walk the hypermedia graph without hand-rolling
//! HTTP calls or ad-hoc JSON inspection.
//!
//! - **Navigate**: [`SirenClient::follow`] for links and entry points,
//!   [`SirenClient::submit`] for actions (GET data goes to the query
//!   string, other methods get a form- or JSON-encoded body).
//! - **Query**: [`Entity`] lookups by rel, class, name, or arbitrary
//!   predicate via [`Search`], with subset semantics for multi-valued
//!   criteria. Misses are `None`/empty, never errors.
//! - **Observe**: per-call completion callbacks plus an [`EventStream`] of
//!   entity/error notifications, callback always first.

pub mod core;

// Top-level re-exports for common usage
pub use crate::core::client::{
    ClientConfig, ClientEvent, Completion, EventStream, Fetched, FollowTarget, NativeTransport,
    SirenClient,
};
pub use crate::core::entity::Entity;
pub use crate::core::error::{Result, SirenError};
pub use crate::core::protocol::SIREN_MEDIA_TYPE;
pub use crate::core::traits::SirenTransport;
pub use crate::core::types::{
    Action, Criteria, Document, Field, Link, Matchable, Search, SearchFn, SirenRequest,
    SirenResponse,
};
