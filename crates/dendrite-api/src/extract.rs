//! Tool calls emitted by the inference engine itself
//!
//! Model output is looser than client input, so every candidate is validated
//! before normalization and invalid candidates are dropped rather than
//! reported as errors.

use serde_json::{Map, Value};

use crate::normalize::normalize_tool_call;
use crate::types::ToolCall;

/// Whether a candidate has a usable tool-call shape
///
/// Accepts an object whose `function` is an object with a string `name`, or
/// an object without `function` that has a top-level string `name`.
pub fn is_valid_tool_call(candidate: &Value) -> bool {
    let Value::Object(candidate) = candidate else {
        return false;
    };

    match candidate.get("function") {
        Some(Value::Object(function)) => matches!(function.get("name"), Some(Value::String(_))),
        Some(_) => false,
        None => matches!(candidate.get("name"), Some(Value::String(_))),
    }
}

/// Normalize a model-emitted tool call found at `position`
///
/// A missing `id` becomes `call_{position + 1}`, which is unique within one
/// response as long as positions are distinct.
pub fn extract_tool_call(candidate: &Value, position: usize) -> ToolCall {
    match candidate {
        Value::Object(candidate) => normalize_tool_call(candidate, position),
        _ => normalize_tool_call(&Map::new(), position),
    }
}

/// Extract every valid tool call from a model output container
///
/// Recognizes `{"tool_calls": [...]}` (positions are array indices, invalid
/// elements skipped) and `{"function_call": {...}}`. Returns `None` when
/// nothing usable was found.
pub fn extract_all_tool_calls(container: &Value) -> Option<Vec<ToolCall>> {
    let Value::Object(container) = container else {
        return None;
    };

    if let Some(calls) = container.get("tool_calls") {
        let Value::Array(calls) = calls else {
            return None;
        };

        let extracted: Vec<ToolCall> = calls
            .iter()
            .enumerate()
            .filter(|(_, call)| is_valid_tool_call(call))
            .map(|(position, call)| extract_tool_call(call, position))
            .collect();

        let skipped = calls.len() - extracted.len();
        if skipped > 0 {
            tracing::debug!(skipped, extracted = extracted.len(), "dropped invalid tool call candidates");
        }

        return (!extracted.is_empty()).then_some(extracted);
    }

    let call = container.get("function_call")?;
    is_valid_tool_call(call).then(|| vec![extract_tool_call(call, 0)])
}

/// Extract tool calls from raw model output text
///
/// Tolerates surrounding whitespace and a Markdown code fence around the
/// JSON. Text that is not JSON simply yields `None`.
pub fn extract_tool_calls_from_text(text: &str) -> Option<Vec<ToolCall>> {
    let json = strip_code_fence(text.trim());
    let container: Value = serde_json::from_str(json).ok()?;
    extract_all_tool_calls(&container)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = body.strip_suffix("```") else {
        return text;
    };
    // drop the info string, e.g. "json"
    body.split_once('\n').map_or(body, |(_, rest)| rest).trim()
}
