mod harness;

use dendrite_api::{ToolCall, extract_all_tool_calls, extract_tool_calls_from_text};
use harness::wire;
use serde_json::json;

#[test]
fn function_call_container() {
    let calls = extract_all_tool_calls(&json!({"function_call": {"name": "f", "arguments": {"x": 1}}})).unwrap();

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].id, "call_1");
    assert_eq!(calls[0].call_type, "function");
    assert_eq!(calls[0].function.arguments, "{\"x\":1}");
}

#[test]
fn invalid_elements_do_not_hide_valid_ones() {
    let calls = extract_all_tool_calls(&json!({"tool_calls": [{"name": "f"}, {"bogus": true}]})).unwrap();
    assert_eq!(calls, vec![ToolCall::function("call_1", "f", "")]);
}

#[test]
fn unrecognized_containers_find_nothing() {
    assert!(extract_all_tool_calls(&json!({"content": "just text"})).is_none());
    assert!(extract_all_tool_calls(&json!({"tool_calls": [{"bogus": true}]})).is_none());
    assert!(extract_tool_calls_from_text("I don't need any tools for that.").is_none());
}

#[test]
fn missing_ids_are_stable_across_runs() {
    let container = json!({"tool_calls": [{"name": "a"}, {"name": "b"}, {"id": "keep", "name": "c"}]});

    let ids = |calls: Vec<ToolCall>| calls.into_iter().map(|call| call.id).collect::<Vec<_>>();
    let first = ids(extract_all_tool_calls(&container).unwrap());
    let second = ids(extract_all_tool_calls(&container).unwrap());

    assert_eq!(first, vec!["call_1", "call_2", "keep"]);
    assert_eq!(first, second);
}

#[test]
fn nested_arguments_survive_the_string_form() {
    let arguments = json!({"query": "rust", "filters": {"year": 2024, "tags": ["async", "serde"]}, "limit": null});
    let calls = extract_all_tool_calls(&json!({"tool_calls": [{"function": {"name": "search", "arguments": arguments}}]}))
        .unwrap();

    assert_eq!(calls[0].function.parse_arguments().unwrap(), arguments);
}

#[test]
fn null_arguments_stay_decodable() {
    let calls = extract_all_tool_calls(&json!({"tool_calls": [{"name": "f", "arguments": null}]})).unwrap();

    assert_eq!(calls[0].function.arguments, "null");
    assert_eq!(calls[0].function.parse_arguments().unwrap(), serde_json::Value::Null);
}

#[test]
fn serialization_is_idempotent() {
    let calls = extract_all_tool_calls(&json!({"tool_calls": [{"name": "f", "arguments": {"z": 1, "a": [true]}}]})).unwrap();

    let first = serde_json::to_string(&calls[0]).unwrap();
    let second = serde_json::to_string(&calls[0]).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        wire(&calls[0]),
        json!({"id": "call_1", "type": "function", "function": {"name": "f", "arguments": "{\"a\":[true],\"z\":1}"}})
    );
}

#[test]
fn fenced_model_output() {
    let output = "```json\n{\"tool_calls\": [{\"id\": \"abc\", \"type\": \"function\", \"function\": {\"name\": \"lookup\", \"arguments\": \"{\\\"id\\\": 7}\"}}]}\n```";
    let calls = extract_tool_calls_from_text(output).unwrap();

    assert_eq!(calls, vec![ToolCall::function("abc", "lookup", "{\"id\": 7}")]);
}
