use serde::Deserialize;

/// Metadata for the model served behind the API
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Model identifier used in responses and the model list
    #[serde(default = "default_name")]
    pub name: String,
    /// Owner reported in the model list
    #[serde(default = "default_owned_by")]
    pub owned_by: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            owned_by: default_owned_by(),
        }
    }
}

fn default_name() -> String {
    "Distributed Model".to_string()
}

fn default_owned_by() -> String {
    "user".to_string()
}
