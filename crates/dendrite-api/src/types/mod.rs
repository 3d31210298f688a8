//! Canonical chat completion model
//!
//! Request-side types are produced by [`crate::normalize`]. Response-side
//! types serialize directly into the `OpenAI` wire shape, so encoding a
//! response is a plain `serde_json::to_string` call.

pub mod message;
pub mod model;
pub mod request;
pub mod response;
mod serde_helpers;
pub mod stream;
pub mod tool;

pub use message::{FunctionCall, Message, Role, ToolCall};
pub use model::{Model, ModelList};
pub use request::{DEFAULT_STOP, InferenceParams, SamplingDefaults, UNBOUNDED_MAX_TOKENS};
pub use response::{CHAT_COMPLETION_OBJECT, COMPLETION_ID, ChatCompletion, Choice, FinishReason, Usage};
pub use stream::{CHUNK_ID, ChatCompletionChunk, ChunkChoice, Delta, ToolCallDelta};
pub use tool::{FUNCTION_TYPE, FunctionDefinition, ToolChoice, ToolDefinition};
