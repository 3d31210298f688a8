use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Tool type used by every tool definition and call today
pub const FUNCTION_TYPE: &str = "function";

/// Definition of a tool the model can call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    /// Tool type (currently always "function")
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Function specification
    pub function: FunctionDefinition,
}

impl ToolDefinition {
    /// Define a function tool
    pub fn function(function: FunctionDefinition) -> Self {
        Self {
            tool_type: FUNCTION_TYPE.to_owned(),
            function,
        }
    }
}

/// Specification of a callable function
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinition {
    /// Function name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema for the function parameters, passed through unvalidated
    pub parameters: Value,
}

impl FunctionDefinition {
    /// Function with no description and an empty parameter object
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Value::Object(Map::new()),
        }
    }
}

/// How the model should select tools
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ToolChoice {
    /// Model decides whether to call tools
    Auto,
    /// Model will not call any tools
    #[default]
    None,
    /// Model must call at least one tool
    Required,
    /// Model must call the named function
    Named(String),
}

impl ToolChoice {
    /// Force a specific function; an empty name is not a valid choice
    pub fn named(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self::Named(name))
    }

    /// Name of the forced function, if any
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name.as_str()),
            Self::Auto | Self::None | Self::Required => None,
        }
    }

    /// Whether the model may emit tool calls at all
    pub const fn allows_tools(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Serialize for ToolChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Auto => ToolChoiceWire::Mode(ToolChoiceMode::Auto),
            Self::None => ToolChoiceWire::Mode(ToolChoiceMode::None),
            Self::Required => ToolChoiceWire::Mode(ToolChoiceMode::Required),
            Self::Named(name) => ToolChoiceWire::Function(ToolChoiceFunction {
                tool_type: FUNCTION_TYPE,
                function: ToolChoiceFunctionName { name },
            }),
        };
        wire.serialize(serializer)
    }
}

/// Wire form of a tool choice: a bare mode string or a forced function
#[derive(Serialize)]
#[serde(untagged)]
enum ToolChoiceWire<'a> {
    Mode(ToolChoiceMode),
    Function(ToolChoiceFunction<'a>),
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum ToolChoiceMode {
    None,
    Auto,
    Required,
}

#[derive(Serialize)]
struct ToolChoiceFunction<'a> {
    #[serde(rename = "type")]
    tool_type: &'a str,
    function: ToolChoiceFunctionName<'a>,
}

#[derive(Serialize)]
struct ToolChoiceFunctionName<'a> {
    name: &'a str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_choice_is_none() {
        assert_eq!(ToolChoice::default(), ToolChoice::None);
        assert!(!ToolChoice::default().allows_tools());
    }

    #[test]
    fn named_rejects_empty_name() {
        assert_eq!(ToolChoice::named(""), None);
        assert_eq!(ToolChoice::named("lookup"), Some(ToolChoice::Named("lookup".to_owned())));
    }

    #[test]
    fn choice_serializes_to_wire_form() {
        assert_eq!(serde_json::to_value(ToolChoice::Auto).unwrap(), json!("auto"));
        assert_eq!(serde_json::to_value(ToolChoice::None).unwrap(), json!("none"));
        assert_eq!(serde_json::to_value(ToolChoice::Required).unwrap(), json!("required"));
        assert_eq!(
            serde_json::to_value(ToolChoice::Named("lookup".to_owned())).unwrap(),
            json!({"type": "function", "function": {"name": "lookup"}})
        );
    }

    #[test]
    fn definition_always_emits_all_fields() {
        let tool = ToolDefinition::function(FunctionDefinition::new("f"));
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({"type": "function", "function": {"name": "f", "description": "", "parameters": {}}})
        );
    }
}
