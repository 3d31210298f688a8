//! Inbound normalization of loosely-shaped request JSON
//!
//! Required fields and typed scalar overrides are strict: a mismatch rejects
//! the whole request with [`ApiError::MalformedRequest`]. Tool definitions,
//! tool calls and `tool_choice` objects are lenient and skipped on mismatch.

mod fields;
mod message;
mod params;
mod tool;

use serde_json::Value;

use crate::error::ApiError;

pub use message::parse_messages;
pub use params::{parse_inference_params, parse_inference_params_str};
pub(crate) use tool::normalize_tool_call;
pub use tool::{
    arguments_to_string, default_tool_choice, fallback_call_id, parse_tool_choice, parse_tools, resolve_tool_choice,
};

/// Decode a canonical entity from a raw JSON value
pub trait Decode: Sized {
    fn decode(value: &Value) -> Result<Self, ApiError>;
}
