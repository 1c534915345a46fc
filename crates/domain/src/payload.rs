//! Validated JSON decoding at the API boundary.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// Decode `body` (received from `url`) into a typed payload.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not JSON or does not match `T`.
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, DecodeError> {
    serde_json::from_str(body).map_err(|err| DecodeError::new(url, err.to_string()))
}

/// Decode `body` as an untyped JSON value.
///
/// Used for non-success responses, whose shape is unknown.
///
/// # Errors
///
/// Returns [`DecodeError`] when the body is not JSON.
pub fn decode_value(url: &str, body: &str) -> Result<Value, DecodeError> {
    decode(url, body)
}

/// Text shown for a raw JSON value: strings as-is, everything else as
/// compact JSON.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
