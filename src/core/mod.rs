//! Siren Hypermedia Client Implementation for Rust
//!
//! A client for APIs speaking the Siren hypermedia format: every response
//! is a self-describing entity document combining data, navigational
//! links, and available actions.
//!
//! # Modules
//!
//! - [`client`] - HTTP client: follow links, submit actions, receive events
//! - [`entity`] - Queryable wrapper over one Siren document
//! - [`protocol`] - Media-type gate and payload encoding
//! - [`types`] - Document/Link/Action/Field, search criteria, request/response
//! - [`traits`] - Transport abstraction the client consumes
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::core::{Search, SirenClient};
//!
//! let client = SirenClient::new();
//! let mut events = client.events();
//!
//! let fetched = client.follow("https://api.example.com/").await?;
//! if let Some(link) = fetched.entity.link("next") {
//!     client.follow(&link).await?;
//! }
//! ```

pub mod client;
pub mod entity;
pub mod error;
pub mod protocol;
pub mod traits;
pub mod types;

// Re-export commonly used types at module root
pub use client::{
    ClientConfig, ClientEvent, Completion, EventStream, Fetched, FollowTarget, NativeTransport,
    SirenClient,
};
pub use entity::Entity;
pub use error::{Result, SirenError};
pub use traits::SirenTransport;
pub use types::{
    Action, Criteria, Document, Field, Link, Matchable, Search, SearchFn, SirenRequest,
    SirenResponse,
};
