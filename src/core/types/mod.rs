//! Core value types for the Siren client.
//!
//! # Type Hierarchy
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       SirenRequest                         │
//! │   (Client → Server: method, url, headers, encoded body)   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │                       SirenResponse                        │
//! │   (Server → Client: status, headers, body, final url)     │
//! └────────────────────────────────────────────────────────────┘
//!                              │ media-type gate
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │              Document / Link / Action / Field              │
//! │        (the Siren wire shape, queried via Search)          │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod document;
pub mod request;
pub mod response;
pub mod search;

pub use document::{Action, Document, Field, Link};
pub use request::SirenRequest;
pub use response::SirenResponse;
pub use search::{Criteria, Matchable, Search, SearchFn};
