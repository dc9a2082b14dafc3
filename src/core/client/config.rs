//! Configuration for the Siren client.
//!
//! # Configuration Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `request_timeout_ms` | 30000 | Per-request timeout |
//! | `max_total_connections` | 100 | Connection pool size |
//! | `proxy_url` | none | Route requests through a proxy |
//! | `cookie_store` | false | Shared session/cookie store |
//! | `enable_logging` | false | Log request/response details |
//!
//! ```
//! use siren_rs::ClientConfig;
//!
//! let config = ClientConfig {
//!     request_timeout_ms: 5000,
//!     ..Default::default()
//! };
//! assert_eq!(config.max_total_connections, 100); // Default
//! ```

/// Configuration for a [`SirenClient`](crate::core::client::SirenClient).
///
/// Everything here is session-scoped and fixed at construction; the
/// client itself keeps no per-request mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Request timeout in milliseconds.
    ///
    /// Maximum time the transport waits for a request to complete. This
    /// is transport configuration, not an operation-level contract: the
    /// caller is notified once, when the request resolves.
    pub request_timeout_ms: u64,

    /// Maximum idle connections kept per host.
    pub max_total_connections: u32,

    /// Proxy URL (optional).
    ///
    /// If set, requests are routed through this proxy.
    pub proxy_url: String,

    /// Enable a shared cookie/session store across requests.
    ///
    /// The transport layer keeps it safe for concurrent use.
    pub cookie_store: bool,

    /// Enable request logging.
    ///
    /// When enabled, logs request/response details using the `tracing`
    /// crate.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            request_timeout_ms: 30000,
            max_total_connections: 100,
            proxy_url: String::new(),
            cookie_store: false,
            enable_logging: false,
        }
    }
}
