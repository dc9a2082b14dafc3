//! reqwest-backed [`SirenTransport`] implementation.

use crate::core::client::config::ClientConfig;
use crate::core::error::{Result, SirenError};
use crate::core::traits::SirenTransport;
use crate::core::types::{SirenRequest, SirenResponse};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Production transport over a shared [`reqwest::Client`].
///
/// reqwest follows redirects itself; the final URL it lands on is
/// reported back on the [`SirenResponse`].
pub struct NativeTransport {
    client: reqwest::Client,
}

impl NativeTransport {
    /// Wrap an existing reqwest client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Build a transport from client configuration. Falls back to the
    /// default reqwest client when the builder rejects the
    /// configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(config.max_total_connections as usize);

        if config.cookie_store {
            builder = builder.cookie_store(true);
        }

        if !config.proxy_url.is_empty() {
            if let Ok(proxy) = reqwest::Proxy::all(&config.proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        Self::new(builder.build().unwrap_or_default())
    }
}

#[async_trait]
impl SirenTransport for NativeTransport {
    async fn execute(&self, request: SirenRequest) -> Result<SirenResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| SirenError::Config(format!("invalid method {:?}: {e}", request.method)))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if request.has_body() {
            builder = builder.body(request.body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SirenError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SirenError::Http(e.to_string()))?;

        Ok(SirenResponse {
            status,
            headers,
            body,
            url,
        })
    }
}
