//! Siren HTTP client implementation.
//!
//! This module provides the client half of the protocol: turn a
//! navigation intent into one HTTP exchange, gate the response on the
//! Siren media type, and deliver the resulting entity (or error) to the
//! caller.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── fetch            - SirenClient: follow/submit and dispatch
//! ├── events           - ClientEvent fan-out and EventStream
//! ├── config           - Client configuration
//! └── native_transport - reqwest-backed SirenTransport
//! ```

mod config;
mod events;
mod fetch;
pub mod native_transport;

pub use config::ClientConfig;
pub use events::{ClientEvent, EventStream};
pub use fetch::{Completion, Fetched, FollowTarget, SirenClient};
pub use native_transport::NativeTransport;
