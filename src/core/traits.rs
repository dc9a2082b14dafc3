use crate::core::error::Result;
use crate::core::types::{SirenRequest, SirenResponse};
use async_trait::async_trait;

/// Abstraction over the HTTP capability the client consumes.
///
/// One call per navigation: execute the request (following redirects) and
/// report the completed exchange, including the declared content type and
/// the final post-redirect URL. Implementations must be safe for
/// concurrent use; the client issues overlapping calls from concurrent
/// navigations.
#[async_trait]
pub trait SirenTransport: Send + Sync + 'static {
    /// Perform one HTTP exchange.
    async fn execute(&self, request: SirenRequest) -> Result<SirenResponse>;
}
