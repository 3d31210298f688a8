//! Normalization layer for an OpenAI-compatible chat completion API
//!
//! Loosely-shaped client request bodies are normalized into a canonical
//! [`InferenceParams`], tool calls emitted by the model are validated and
//! given stable identifiers, and the response types serialize straight into
//! the wire shape clients expect.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod extract;
pub mod normalize;
pub mod types;

pub use error::{ApiError, ErrorResponse};
pub use extract::{extract_all_tool_calls, extract_tool_call, extract_tool_calls_from_text, is_valid_tool_call};
pub use normalize::{Decode, parse_inference_params, parse_inference_params_str, parse_messages};
pub use types::{
    CHAT_COMPLETION_OBJECT, CHUNK_ID, COMPLETION_ID, ChatCompletion, ChatCompletionChunk, Choice, ChunkChoice,
    DEFAULT_STOP, Delta, FUNCTION_TYPE, FinishReason, FunctionCall, FunctionDefinition, InferenceParams, Message,
    Model, ModelList, Role, SamplingDefaults, ToolCall, ToolCallDelta, ToolChoice, ToolDefinition,
    UNBOUNDED_MAX_TOKENS, Usage,
};
