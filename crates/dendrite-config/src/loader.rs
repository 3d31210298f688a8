use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml_str(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a sampling value is out of range or a required
    /// string is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_sampling()?;

        if self.model.name.trim().is_empty() {
            anyhow::bail!("model.name must not be empty");
        }

        if self.logging.filter.trim().is_empty() {
            anyhow::bail!("logging.filter must not be empty");
        }

        Ok(())
    }

    fn validate_sampling(&self) -> anyhow::Result<()> {
        let sampling = &self.sampling;

        if !sampling.temperature.is_finite() || sampling.temperature < 0.0 {
            anyhow::bail!(
                "sampling.temperature must be a non-negative number, got {}",
                sampling.temperature
            );
        }

        // (0, 1]
        if !sampling.top_p.is_finite() || sampling.top_p <= 0.0 || sampling.top_p > 1.0 {
            anyhow::bail!("sampling.top_p must be in (0, 1], got {}", sampling.top_p);
        }

        Ok(())
    }
}
