use serde_json::Value;

use super::fields::{kind, present, typed_bool, typed_f32, typed_i32, typed_u64};
use super::message::parse_messages;
use super::tool::{parse_tools, resolve_tool_choice};
use crate::error::ApiError;
use crate::types::{DEFAULT_STOP, InferenceParams, SamplingDefaults, UNBOUNDED_MAX_TOKENS};

/// Normalize a chat completion request body into [`InferenceParams`]
///
/// `messages` is required. Every other field is optional and falls back to
/// `defaults` or the conventional defaults: no streaming, unbounded
/// `max_tokens`, no tools, and the end-of-turn stop sequence.
pub fn parse_inference_params(body: &Value, defaults: &SamplingDefaults) -> Result<InferenceParams, ApiError> {
    let Value::Object(body) = body else {
        return Err(ApiError::malformed(format!(
            "request body must be an object, got {}",
            kind(body)
        )));
    };

    let messages = present(body, "messages")
        .ok_or_else(|| ApiError::malformed("messages is required"))
        .and_then(parse_messages)?;

    let tools = parse_tools(present(body, "tools"));
    let tool_choice = resolve_tool_choice(&tools, present(body, "tool_choice"));

    let params = InferenceParams {
        messages,
        max_tokens: typed_i32(body, "max_tokens")?.unwrap_or(UNBOUNDED_MAX_TOKENS),
        temperature: typed_f32(body, "temperature")?.unwrap_or(defaults.temperature),
        top_p: typed_f32(body, "top_p")?.unwrap_or(defaults.top_p),
        stop: parse_stop(body.get("stop"))?,
        stream: typed_bool(body, "stream")?.unwrap_or(false),
        seed: typed_u64(body, "seed")?.unwrap_or(defaults.seed),
        tools,
        tool_choice,
    };

    tracing::debug!(
        messages = params.messages.len(),
        tools = params.tools.len(),
        tool_choice = ?params.tool_choice,
        stream = params.stream,
        max_tokens = params.max_tokens,
        "normalized chat completion request"
    );

    Ok(params)
}

/// Same as [`parse_inference_params`], starting from the raw body text
pub fn parse_inference_params_str(body: &str, defaults: &SamplingDefaults) -> Result<InferenceParams, ApiError> {
    let body: Value = serde_json::from_str(body)?;
    parse_inference_params(&body, defaults)
}

/// `stop` is strict: an explicit `null` is rejected like any other non-array
fn parse_stop(value: Option<&Value>) -> Result<Vec<String>, ApiError> {
    let Some(value) = value else {
        return Ok(vec![DEFAULT_STOP.to_owned()]);
    };

    let Value::Array(items) = value else {
        return Err(ApiError::malformed(format!(
            "stop must be an array of strings, got {}",
            kind(value)
        )));
    };

    let stop = items
        .iter()
        .map(|item| match item {
            Value::String(sequence) => Ok(sequence.clone()),
            other => Err(ApiError::malformed(format!(
                "stop must be an array of strings, found {}",
                kind(other)
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if stop.is_empty() {
        return Ok(vec![DEFAULT_STOP.to_owned()]);
    }

    Ok(stop)
}
