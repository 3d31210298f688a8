use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use super::message::Message;

/// Identifier reported on every non-streaming completion
pub const COMPLETION_ID: &str = "cmpl-j0";

/// Object type reported on completions and, for compatibility, on chunks too
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";

/// Reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of generation
    Stop,
    /// Hit the `max_tokens` limit
    Length,
    /// Model decided to call a tool
    ToolCalls,
    /// Content was filtered by safety systems
    ContentFilter,
}

impl FinishReason {
    /// Wire representation of the finish reason
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Length => "length",
            Self::ToolCalls => "tool_calls",
            Self::ContentFilter => "content_filter",
        }
    }
}

impl From<FinishReason> for String {
    fn from(reason: FinishReason) -> Self {
        reason.as_str().to_owned()
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion)
    pub total_tokens: u32,
}

impl Usage {
    /// Usage with the total derived from both counts
    pub const fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// A single finished completion choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Index of this choice
    pub index: u32,
    /// Generated message
    pub message: Message,
    /// Why generation stopped, passed through as an opaque string
    pub finish_reason: Option<String>,
}

impl Choice {
    /// Finished choice with its stop reason
    pub fn new(index: u32, message: Message, finish_reason: impl Into<String>) -> Self {
        Self {
            index,
            message,
            finish_reason: Some(finish_reason.into()),
        }
    }
}

/// Non-streaming chat completion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletion {
    /// Response identifier
    pub id: String,
    /// Object type, always "chat.completion"
    pub object: String,
    /// Unix timestamp captured when the response was built
    pub created: u64,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Usage,
    /// Generated choices
    pub choices: Vec<Choice>,
}

impl ChatCompletion {
    /// Completion with the conventional identifier, stamped with the current time
    pub fn new(model: impl Into<String>, choices: Vec<Choice>, usage: Usage) -> Self {
        Self {
            id: COMPLETION_ID.to_owned(),
            object: CHAT_COMPLETION_OBJECT.to_owned(),
            created: unix_now(),
            model: model.into(),
            usage,
            choices,
        }
    }

    /// Replace the conventional identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Current Unix time in seconds
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
