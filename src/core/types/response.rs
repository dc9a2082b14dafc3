//! Completed HTTP exchange as reported by the transport.

use bytes::Bytes;
use std::collections::BTreeMap;

/// One completed HTTP exchange, before validation.
///
/// `url` is the final URL after the transport followed any redirects;
/// relative navigation from the resulting entity anchors there, not at the
/// originally requested URL.
#[derive(Clone, Debug, PartialEq)]
pub struct SirenResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
    pub url: String,
}

impl SirenResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        SirenResponse {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
            url: String::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The declared `Content-Type` header, verbatim.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Default for SirenResponse {
    fn default() -> Self {
        SirenResponse::new(200, "")
    }
}
