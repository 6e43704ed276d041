//! JSON round-trip helpers.
//!
//! Thin generic wrappers over [`serde_json`] so callers can snapshot
//! and restore serde-enabled values (builder state, geometry) without
//! touching serializer configuration.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize `value` to a compact JSON string.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the value cannot be represented
/// as JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Serialize `value` to indented, human-readable JSON.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the value cannot be represented
/// as JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from a JSON string.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if the input is not valid JSON or
/// does not match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}
