use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

/// Sampling defaults for requests that omit them
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Nucleus sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Fixed random seed; derived from the clock when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SamplingConfig {
    /// Seed to use for this process
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            seed: None,
        }
    }
}

const fn default_temperature() -> f32 {
    0.8
}

const fn default_top_p() -> f32 {
    0.9
}
