use serde::Serialize;

use super::message::{FunctionCall, Role, ToolCall};
use super::response::{CHAT_COMPLETION_OBJECT, unix_now};
use super::serde_helpers;
use super::tool::FUNCTION_TYPE;

/// Identifier reported on every streaming chunk
pub const CHUNK_ID: &str = "cmpl-c0";

/// Tool call fragment within a streaming delta
///
/// The function part may be withheld so a call can be announced in one chunk
/// and completed in a later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCallDelta {
    /// Tool call identifier
    pub id: String,
    /// Tool type (currently always "function")
    #[serde(rename = "type")]
    pub call_type: String,
    /// Function name and arguments, when emitted in this chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<FunctionCall>,
}

impl ToolCallDelta {
    /// Announce a tool call without its function payload
    pub fn header(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            call_type: FUNCTION_TYPE.to_owned(),
            function: None,
        }
    }
}

impl From<ToolCall> for ToolCallDelta {
    fn from(call: ToolCall) -> Self {
        Self {
            id: call.id,
            call_type: call.call_type,
            function: Some(call.function),
        }
    }
}

/// Incremental message update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    /// Role of the message author
    pub role: Role,
    /// Incremental text content
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Incremental tool calls
    #[serde(skip_serializing_if = "serde_helpers::is_none_or_empty")]
    pub tool_calls: Option<Vec<ToolCallDelta>>,
}

impl Delta {
    /// Text fragment from the given role
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: None,
        }
    }

    /// Tool call fragments from the assistant
    pub fn tool_calls(tool_calls: Vec<ToolCallDelta>) -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            tool_calls: Some(tool_calls),
        }
    }
}

/// Choice within a streaming chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkChoice {
    /// Choice index
    pub index: u32,
    /// Finish reason, set on the final chunk only
    pub finish_reason: Option<String>,
    /// Incremental delta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<Delta>,
}

impl ChunkChoice {
    /// Chunk choice carrying a delta
    pub const fn delta(index: u32, delta: Delta) -> Self {
        Self {
            index,
            finish_reason: None,
            delta: Some(delta),
        }
    }

    /// Final chunk choice carrying only the finish reason
    pub fn finished(index: u32, finish_reason: impl Into<String>) -> Self {
        Self {
            index,
            finish_reason: Some(finish_reason.into()),
            delta: None,
        }
    }
}

/// One streamed unit of a chat completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionChunk {
    /// Chunk identifier
    pub id: String,
    /// Object type, reported as "chat.completion" for client compatibility
    pub object: String,
    /// Unix timestamp captured when the chunk was built
    pub created: u64,
    /// Model used for generation
    pub model: String,
    /// Delta choices
    pub choices: Vec<ChunkChoice>,
}

impl ChatCompletionChunk {
    /// Single-choice chunk, stamped with the current time
    pub fn new(model: impl Into<String>, choice: ChunkChoice) -> Self {
        Self {
            id: CHUNK_ID.to_owned(),
            object: CHAT_COMPLETION_OBJECT.to_owned(),
            created: unix_now(),
            model: model.into(),
            choices: vec![choice],
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_delta_omits_tool_calls() {
        let delta = Delta::text(Role::Assistant, "Hel");
        assert_eq!(serde_json::to_value(&delta).unwrap(), json!({"role": "assistant", "content": "Hel"}));
    }

    #[test]
    fn empty_delta_keeps_role_only() {
        let mut delta = Delta::tool_calls(Vec::new());
        assert_eq!(serde_json::to_value(&delta).unwrap(), json!({"role": "assistant"}));

        delta.tool_calls = None;
        assert_eq!(serde_json::to_value(&delta).unwrap(), json!({"role": "assistant"}));
    }

    #[test]
    fn tool_call_delta_function_is_optional() {
        let header = ToolCallDelta::header("call_1");
        assert_eq!(serde_json::to_value(&header).unwrap(), json!({"id": "call_1", "type": "function"}));

        let full = ToolCallDelta::from(ToolCall::function("call_1", "f", "{}"));
        assert_eq!(
            serde_json::to_value(&full).unwrap(),
            json!({"id": "call_1", "type": "function", "function": {"name": "f", "arguments": "{}"}})
        );
    }

    #[test]
    fn chunk_wire_shape() {
        let chunk = ChatCompletionChunk::new(
            "Distributed Model",
            ChunkChoice::delta(0, Delta::tool_calls(vec![ToolCallDelta::header("call_1")])),
        );
        let created = chunk.created;

        assert_eq!(
            serde_json::to_value(&chunk).unwrap(),
            json!({
                "id": "cmpl-c0",
                "object": "chat.completion",
                "created": created,
                "model": "Distributed Model",
                "choices": [{
                    "index": 0,
                    "finish_reason": null,
                    "delta": {"role": "assistant", "tool_calls": [{"id": "call_1", "type": "function"}]}
                }]
            })
        );
    }

    #[test]
    fn finished_choice_has_no_delta() {
        let choice = ChunkChoice::finished(0, "length");
        assert_eq!(serde_json::to_value(&choice).unwrap(), json!({"index": 0, "finish_reason": "length"}));
    }
}
