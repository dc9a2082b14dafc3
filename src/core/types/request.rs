//! Outbound request parameters handed to the transport.

use bytes::Bytes;
use std::collections::BTreeMap;

/// One fully-described outbound HTTP request.
///
/// The client builds one of these per navigation (query string already
/// appended, body already encoded) and hands it to the
/// [`SirenTransport`](crate::core::traits::SirenTransport) unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct SirenRequest {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

impl SirenRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        SirenRequest {
            method: method.into(),
            url: url.into(),
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}
