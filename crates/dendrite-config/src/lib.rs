#![allow(clippy::must_use_candidate)]

mod loader;
pub mod logging;
pub mod model;
pub mod sampling;

use serde::Deserialize;

pub use logging::*;
pub use model::*;
pub use sampling::*;

/// Top-level dendrite configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Sampling defaults applied to requests that omit them
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// Model reported in responses and listings
    #[serde(default)]
    pub model: ModelConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
