//! Typed field access over raw JSON objects
//!
//! Explicit `null` is treated as absent everywhere. The `typed_*` readers are
//! strict and reject a present value of the wrong type; [`optional_str`] is
//! lenient and ignores it.

use serde_json::{Map, Value};

use crate::error::ApiError;

pub type Object = Map<String, Value>;

/// Look up a field, treating explicit `null` as absent
pub fn present<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// String field, ignoring values of any other type
pub fn optional_str<'a>(object: &'a Object, key: &str) -> Option<&'a str> {
    match present(object, key) {
        Some(Value::String(value)) => Some(value.as_str()),
        _ => None,
    }
}

/// Name of a JSON value's type, for error messages
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn mismatch(key: &str, expected: &str, found: &Value) -> ApiError {
    ApiError::malformed(format!("{key} must be {expected}, got {}", kind(found)))
}

pub fn typed_bool(object: &Object, key: &str) -> Result<Option<bool>, ApiError> {
    match present(object, key) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(other) => Err(mismatch(key, "a boolean", other)),
    }
}

pub fn typed_string(object: &Object, key: &str) -> Result<Option<String>, ApiError> {
    match present(object, key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(mismatch(key, "a string", other)),
    }
}

#[allow(clippy::cast_possible_truncation)]
pub fn typed_f32(object: &Object, key: &str) -> Result<Option<f32>, ApiError> {
    match present(object, key) {
        None => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(|value| Some(value as f32))
            .ok_or_else(|| ApiError::malformed(format!("{key} is out of range"))),
        Some(other) => Err(mismatch(key, "a number", other)),
    }
}

pub fn typed_u64(object: &Object, key: &str) -> Result<Option<u64>, ApiError> {
    match present(object, key) {
        None => Ok(None),
        Some(Value::Number(number)) => number
            .as_u64()
            .map(Some)
            .ok_or_else(|| ApiError::malformed(format!("{key} must be an unsigned integer, got {number}"))),
        Some(other) => Err(mismatch(key, "an unsigned integer", other)),
    }
}

pub fn typed_i32(object: &Object, key: &str) -> Result<Option<i32>, ApiError> {
    match present(object, key) {
        None => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|value| i32::try_from(value).ok())
            .map(Some)
            .ok_or_else(|| ApiError::malformed(format!("{key} must be a 32-bit integer, got {number}"))),
        Some(other) => Err(mismatch(key, "an integer", other)),
    }
}
