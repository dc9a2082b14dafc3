//! Error types for Siren client operations.
//!
//! The [`Result`] type alias provides a shorthand for operations that may
//! fail. Every failure a navigation can produce is a [`SirenError`];
//! lookup misses on an [`Entity`](crate::core::entity::Entity) are not
//! errors and are represented as `None`/empty results instead.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Protocol | `ContentType` |
//! | Transport | `Http`, `BodyParse` |
//! | Caller | `Encode`, `Config` |
//!
//! Protocol and transport errors travel the same notification path (the
//! completion callback, then the `error` event); use
//! [`SirenError::is_protocol()`] / [`SirenError::is_transport()`] to tell
//! them apart in handlers.

use thiserror::Error;

/// Result type for Siren client operations.
pub type Result<T> = std::result::Result<T, SirenError>;

/// Errors that can occur while navigating a Siren API.
///
/// Variants carry plain strings so the error is `Clone` and a single
/// failure can be fanned out to every event subscriber.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SirenError {
    /// The request could not be completed at the transport level
    /// (connection failure, timeout, unreadable response).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response did not declare the Siren media type.
    ///
    /// Carries the declared content type, or `None` when the response had
    /// no `Content-Type` header at all. The body is never parsed into an
    /// entity in this case, even when the HTTP status was a success.
    #[error("not a Siren response (content type {0:?})")]
    ContentType(Option<String>),

    /// The response declared the Siren media type but its body was not a
    /// well-formed Siren document.
    #[error("body parse error: {0}")]
    BodyParse(String),

    /// Action data could not be serialized for submission.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid parameters were provided when building the client or a
    /// request.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SirenError {
    fn from(err: serde_json::Error) -> Self {
        SirenError::BodyParse(err.to_string())
    }
}

impl SirenError {
    /// Whether this is a protocol-level rejection: the exchange completed
    /// but the response was not Siren.
    #[inline]
    #[must_use]
    pub fn is_protocol(&self) -> bool {
        matches!(self, SirenError::ContentType(_))
    }

    /// Whether the underlying exchange itself failed (network failure or
    /// an unreadable body).
    #[inline]
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SirenError::Http(_) | SirenError::BodyParse(_))
    }
}
