use serde_json::{Map, Value};

use super::Decode;
use super::fields::{Object, optional_str, present};
use crate::error::ApiError;
use crate::types::{FUNCTION_TYPE, FunctionCall, FunctionDefinition, ToolCall, ToolChoice, ToolDefinition};

/// Identifier assigned to a tool call that arrived without one
pub fn fallback_call_id(position: usize) -> String {
    format!("call_{}", position + 1)
}

/// Render tool-call arguments as a string
///
/// Strings pass through verbatim; any other value is re-serialized to compact
/// JSON so structured arguments never leak downstream.
pub fn arguments_to_string(arguments: &Value) -> String {
    match arguments {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    }
}

/// Normalize one tool-call object into a canonical [`ToolCall`]
///
/// Name and arguments come from the nested `function` object when present,
/// otherwise from the top level. Missing arguments become an empty string,
/// while any present value, `null` included, is rendered through
/// [`arguments_to_string`]. An empty `type` becomes "function" and an
/// empty `id` becomes `call_{position + 1}`. Shared by client message history
/// and model-emitted tool calls.
pub fn normalize_tool_call(object: &Object, position: usize) -> ToolCall {
    let (name, arguments) = match present(object, "function") {
        Some(Value::Object(function)) => (optional_str(function, "name"), function.get("arguments")),
        Some(_) => (None, None),
        None => (optional_str(object, "name"), object.get("arguments")),
    };

    let id = optional_str(object, "id")
        .filter(|id| !id.is_empty())
        .map_or_else(|| fallback_call_id(position), str::to_owned);

    let call_type = optional_str(object, "type")
        .filter(|call_type| !call_type.is_empty())
        .unwrap_or(FUNCTION_TYPE);

    ToolCall {
        id,
        call_type: call_type.to_owned(),
        function: FunctionCall {
            name: name.unwrap_or_default().to_owned(),
            arguments: arguments.map(arguments_to_string).unwrap_or_default(),
        },
    }
}

impl Decode for ToolDefinition {
    fn decode(value: &Value) -> Result<Self, ApiError> {
        let Value::Object(tool) = value else {
            return Err(ApiError::malformed("tool must be an object"));
        };

        let Some(Value::Object(function)) = present(tool, "function") else {
            return Err(ApiError::malformed("tool function must be an object"));
        };

        let name = optional_str(function, "name")
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiError::malformed("tool function name must be a non-empty string"))?;

        Ok(Self {
            tool_type: optional_str(tool, "type").unwrap_or(FUNCTION_TYPE).to_owned(),
            function: FunctionDefinition {
                name: name.to_owned(),
                description: optional_str(function, "description").unwrap_or_default().to_owned(),
                parameters: present(function, "parameters")
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new())),
            },
        })
    }
}

/// Decode the `tools` field, skipping malformed definitions
pub fn parse_tools(value: Option<&Value>) -> Vec<ToolDefinition> {
    let Some(value) = value else {
        return Vec::new();
    };

    let Value::Array(items) = value else {
        tracing::debug!("ignoring non-array tools field");
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            ToolDefinition::decode(item)
                .inspect_err(|e| tracing::warn!(index, error = %e, "skipping malformed tool definition"))
                .ok()
        })
        .collect()
}

/// Provisional tool choice before any explicit `tool_choice` is applied
pub const fn default_tool_choice(tools: &[ToolDefinition]) -> ToolChoice {
    if tools.is_empty() { ToolChoice::None } else { ToolChoice::Auto }
}

/// Interpret an explicit `tool_choice` value
///
/// Returns `None` when the shape is not recognized, in which case the
/// provisional choice stays in effect.
pub fn parse_tool_choice(value: &Value) -> Option<ToolChoice> {
    match value {
        Value::String(mode) => Some(match mode.as_str() {
            "none" => ToolChoice::None,
            "required" => ToolChoice::Required,
            _ => ToolChoice::Auto,
        }),
        Value::Object(choice) => {
            if optional_str(choice, "type") != Some(FUNCTION_TYPE) {
                return None;
            }
            let Some(Value::Object(function)) = present(choice, "function") else {
                return None;
            };
            optional_str(function, "name").and_then(ToolChoice::named)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => None,
    }
}

/// Resolve the tool choice in two phases: tools-presence default, then the
/// explicit field when it is well-formed
pub fn resolve_tool_choice(tools: &[ToolDefinition], explicit: Option<&Value>) -> ToolChoice {
    let provisional = default_tool_choice(tools);

    match explicit {
        Some(value) => parse_tool_choice(value).unwrap_or_else(|| {
            tracing::debug!(tool_choice = %value, "ignoring unrecognized tool_choice");
            provisional
        }),
        None => provisional,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Object {
        match value {
            Value::Object(object) => object,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn nested_object_arguments_are_serialized() {
        let call = normalize_tool_call(
            &object(json!({"id": "abc", "function": {"name": "f", "arguments": {"x": 1}}})),
            0,
        );
        assert_eq!(call, ToolCall::function("abc", "f", r#"{"x":1}"#));
    }

    #[test]
    fn string_arguments_pass_through_verbatim() {
        let call = normalize_tool_call(&object(json!({"function": {"name": "f", "arguments": "{ \"x\" : 1 }"}})), 0);
        assert_eq!(call.function.arguments, "{ \"x\" : 1 }");
    }

    #[test]
    fn null_arguments_render_as_json_null() {
        let nested = normalize_tool_call(&object(json!({"function": {"name": "f", "arguments": null}})), 0);
        assert_eq!(nested.function.arguments, "null");
        assert_eq!(nested.function.parse_arguments().unwrap(), Value::Null);

        let top_level = normalize_tool_call(&object(json!({"name": "f", "arguments": null})), 0);
        assert_eq!(top_level.function.arguments, "null");
    }

    #[test]
    fn top_level_shape_is_used_without_function() {
        let call = normalize_tool_call(&object(json!({"name": "f", "arguments": [1, 2]})), 2);
        assert_eq!(call, ToolCall::function("call_3", "f", "[1,2]"));
    }

    #[test]
    fn empty_id_and_type_get_defaults() {
        let call = normalize_tool_call(&object(json!({"id": "", "type": "", "function": {"name": "f"}})), 4);
        assert_eq!(call.id, "call_5");
        assert_eq!(call.call_type, "function");
        assert_eq!(call.function.arguments, "");
    }

    #[test]
    fn tool_definition_defaults() {
        let tool = ToolDefinition::decode(&json!({"function": {"name": "f"}})).unwrap();
        assert_eq!(tool, ToolDefinition::function(FunctionDefinition::new("f")));
    }

    #[test]
    fn tool_parameters_pass_through_opaquely() {
        let schema = json!({"type": "object", "properties": {"q": {"type": "string"}}, "x-anything": [1]});
        let tool = ToolDefinition::decode(&json!({
            "type": "function",
            "function": {"name": "search", "description": "Search the web", "parameters": schema}
        }))
        .unwrap();
        assert_eq!(tool.function.description, "Search the web");
        assert_eq!(tool.function.parameters, schema);
    }

    #[test]
    fn malformed_tools_are_skipped() {
        let tools = parse_tools(Some(&json!([
            {"type": "function", "function": {"name": "keep"}},
            "not a tool",
            {"type": "function"},
            {"type": "function", "function": {"name": 3}},
            {"type": "function", "function": {"name": ""}}
        ])));
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].function.name, "keep");
    }

    #[test]
    fn non_array_tools_are_ignored() {
        assert!(parse_tools(Some(&json!({"name": "f"}))).is_empty());
        assert!(parse_tools(None).is_empty());
    }

    #[test]
    fn provisional_choice_follows_tools() {
        let tools = vec![ToolDefinition::function(FunctionDefinition::new("f"))];
        assert_eq!(default_tool_choice(&tools), ToolChoice::Auto);
        assert_eq!(default_tool_choice(&[]), ToolChoice::None);
    }

    #[test]
    fn string_modes() {
        assert_eq!(parse_tool_choice(&json!("none")), Some(ToolChoice::None));
        assert_eq!(parse_tool_choice(&json!("required")), Some(ToolChoice::Required));
        assert_eq!(parse_tool_choice(&json!("auto")), Some(ToolChoice::Auto));
        assert_eq!(parse_tool_choice(&json!("whatever")), Some(ToolChoice::Auto));
    }

    #[test]
    fn named_choice_requires_function_type_and_name() {
        assert_eq!(
            parse_tool_choice(&json!({"type": "function", "function": {"name": "X"}})),
            Some(ToolChoice::Named("X".to_owned()))
        );
        assert_eq!(parse_tool_choice(&json!({"type": "tool", "function": {"name": "X"}})), None);
        assert_eq!(parse_tool_choice(&json!({"type": "function"})), None);
        assert_eq!(parse_tool_choice(&json!({"type": "function", "function": {"name": ""}})), None);
        assert_eq!(parse_tool_choice(&json!(true)), None);
    }

    #[test]
    fn unrecognized_explicit_choice_keeps_provisional() {
        let tools = vec![ToolDefinition::function(FunctionDefinition::new("f"))];
        assert_eq!(resolve_tool_choice(&tools, Some(&json!({"type": "bogus"}))), ToolChoice::Auto);
        assert_eq!(resolve_tool_choice(&[], Some(&json!(42))), ToolChoice::None);
    }

    #[test]
    fn explicit_choice_wins_over_provisional() {
        let tools = vec![ToolDefinition::function(FunctionDefinition::new("f"))];
        assert_eq!(resolve_tool_choice(&tools, Some(&json!("none"))), ToolChoice::None);
        assert_eq!(
            resolve_tool_choice(&[], Some(&json!({"type": "function", "function": {"name": "X"}}))),
            ToolChoice::Named("X".to_owned())
        );
    }
}
