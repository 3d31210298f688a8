use serde::Serialize;

use super::message::Message;
use super::tool::{ToolChoice, ToolDefinition};

/// `max_tokens` value meaning "no output limit"
pub const UNBOUNDED_MAX_TOKENS: i32 = -1;

/// Stop sequence used when the client supplies none
pub const DEFAULT_STOP: &str = "<|eot_id|>";

/// Process-wide sampling defaults applied when a request omits them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingDefaults {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Random seed
    pub seed: u64,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_p: 0.9,
            seed: 0,
        }
    }
}

/// Canonical chat completion request handed to the inference engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferenceParams {
    /// Conversation messages, in order
    pub messages: Vec<Message>,
    /// Maximum tokens to generate, [`UNBOUNDED_MAX_TOKENS`] when unlimited
    pub max_tokens: i32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Stop sequences, never empty
    pub stop: Vec<String>,
    /// Whether to stream the response
    pub stream: bool,
    /// Random seed
    pub seed: u64,
    /// Tool definitions available to the model
    pub tools: Vec<ToolDefinition>,
    /// Resolved tool selection policy
    pub tool_choice: ToolChoice,
}

impl InferenceParams {
    /// Output token limit, `None` when unbounded
    pub fn max_tokens_limit(&self) -> Option<u32> {
        u32::try_from(self.max_tokens).ok()
    }

    /// Whether the request declares any tools
    pub fn has_tools(&self) -> bool {
        !self.tools.is_empty()
    }
}
