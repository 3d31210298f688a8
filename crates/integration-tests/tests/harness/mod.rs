//! Shared fixtures for the scenario tests

#![allow(dead_code)]

use dendrite_api::{ApiError, InferenceParams, SamplingDefaults};
use dendrite_config::Config;
use serde_json::Value;

/// Seed pinned so normalized output is reproducible
pub const SEED: u64 = 42;

/// Sampling defaults derived from a configuration, as the binary builds them
pub fn defaults_from(config: &Config) -> SamplingDefaults {
    SamplingDefaults {
        temperature: config.sampling.temperature,
        top_p: config.sampling.top_p,
        seed: config.sampling.seed.unwrap_or(SEED),
    }
}

/// Normalize a request body against the built-in configuration
pub fn normalize(body: &Value) -> Result<InferenceParams, ApiError> {
    dendrite_api::parse_inference_params(body, &defaults_from(&Config::default()))
}

/// Serialize any outbound value to a JSON tree for comparison
pub fn wire<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("outbound types always serialize")
}
