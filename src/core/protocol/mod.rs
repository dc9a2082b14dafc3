//! Siren protocol constants and response validation.
//!
//! A completed exchange is accepted iff the response declares the Siren
//! media type. The comparison uses the media-type *essence*: parameters
//! such as `charset` are stripped and case is folded before the exact
//! match, so `application/vnd.siren+json; charset=utf-8` passes while
//! `application/json` is rejected even when its body would parse.

pub mod encoding;

use crate::core::error::{Result, SirenError};
use crate::core::types::SirenResponse;

/// The Siren media type: the `Accept` value sent on every request and the
/// required `Content-Type` on every response.
pub const SIREN_MEDIA_TYPE: &str = "application/vnd.siren+json";

/// Media-type essence of a `Content-Type` value: parameters stripped,
/// whitespace trimmed, lowercased.
pub fn media_type_essence(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Whether a declared content type is the Siren media type.
pub fn is_siren(content_type: &str) -> bool {
    media_type_essence(content_type) == SIREN_MEDIA_TYPE
}

/// Accept a completed exchange iff it declared the Siren media type.
///
/// The HTTP status code plays no part here: a 200 with the wrong content
/// type is still a protocol error, and the body is never parsed.
pub fn validate(response: &SirenResponse) -> Result<()> {
    match response.content_type() {
        Some(declared) if is_siren(declared) => Ok(()),
        declared => Err(SirenError::ContentType(declared.map(str::to_string))),
    }
}
