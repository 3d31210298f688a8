use serde_json::Value;

use super::Decode;
use super::fields::{kind, optional_str, present, typed_string};
use super::tool::normalize_tool_call;
use crate::error::ApiError;
use crate::types::{Message, Role, ToolCall};

impl Decode for Message {
    fn decode(value: &Value) -> Result<Self, ApiError> {
        let Value::Object(message) = value else {
            return Err(ApiError::malformed(format!("message must be an object, got {}", kind(value))));
        };

        let role = match message.get("role") {
            Some(Value::String(role)) => Role::from(role.as_str()),
            Some(other) => {
                return Err(ApiError::malformed(format!("role must be a string, got {}", kind(other))));
            }
            None => return Err(ApiError::malformed("role is required")),
        };

        let content = present(message, "content").map(decode_content).transpose()?;
        let tool_call_id = typed_string(message, "tool_call_id")?;

        let tool_calls = match present(message, "tool_calls") {
            Some(Value::Array(calls)) => decode_tool_calls(calls),
            _ => Vec::new(),
        };

        Ok(Self {
            role,
            content,
            tool_call_id,
            tool_calls,
        })
    }
}

/// Content is either a string or an array of content parts; only text parts
/// contribute, concatenated in order
fn decode_content(value: &Value) -> Result<String, ApiError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Array(parts) => Ok(parts
            .iter()
            .filter_map(|part| match part {
                Value::Object(part) if optional_str(part, "type") == Some("text") => optional_str(part, "text"),
                _ => None,
            })
            .collect()),
        other => Err(ApiError::malformed(format!(
            "content must be a string or an array of content parts, got {}",
            kind(other)
        ))),
    }
}

fn decode_tool_calls(calls: &[Value]) -> Vec<ToolCall> {
    calls
        .iter()
        .enumerate()
        .filter_map(|(position, call)| match call {
            Value::Object(call) => Some(normalize_tool_call(call, position)),
            other => {
                tracing::warn!(position, found = kind(other), "skipping non-object tool call in message");
                None
            }
        })
        .collect()
}

/// Parse the `messages` array of a request
///
/// Any malformed message rejects the whole list; the error names its index.
pub fn parse_messages(raw: &Value) -> Result<Vec<Message>, ApiError> {
    let Value::Array(items) = raw else {
        return Err(ApiError::malformed(format!("messages must be an array, got {}", kind(raw))));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| Message::decode(item).map_err(|e| e.at(&format!("messages[{index}]"))))
        .collect()
}
