//! Query-string and body encoding for action submission.
//!
//! Action data arrives as an arbitrary serializable value and must be an
//! object (a map of field name to value). Scalars render with their JSON
//! text (strings unquoted, `null` empty), arrays repeat the key once per
//! element, and nested structures render as JSON text.

use crate::core::error::{Result, SirenError};
use serde_json::Value;
use url::form_urlencoded;

/// Content type for form-encoded request bodies.
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Content type for JSON request bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Flatten an object of action data into ordered form pairs.
pub fn to_pairs(data: &Value) -> Result<Vec<(String, String)>> {
    let map = match data {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(SirenError::Encode(format!(
                "action data must be an object, got {}",
                type_name(other)
            )))
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar(item)));
                }
            }
            other => pairs.push((key.clone(), scalar(other))),
        }
    }
    Ok(pairs)
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Append `data` to `href` as query parameters, keeping any query string
/// already present.
pub fn append_query(href: &str, data: &Value) -> Result<String> {
    let pairs = to_pairs(data)?;
    if pairs.is_empty() {
        return Ok(href.to_string());
    }
    let separator = if href.contains('?') { '&' } else { '?' };
    Ok(format!("{href}{separator}{}", encode_pairs(&pairs)))
}

/// Encode `data` as a form-urlencoded request body.
pub fn form_body(data: &Value) -> Result<String> {
    Ok(encode_pairs(&to_pairs(data)?))
}
