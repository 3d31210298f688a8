//! Logging for dendrite
//!
//! Installs a `tracing-subscriber` registry that writes to stderr, keeping
//! stdout free for JSON output.

use dendrite_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from configuration
///
/// `override_filter` (from the command line or environment) takes precedence
/// over the configured filter. An unparseable filter falls back to "info".
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LoggingConfig, override_filter: Option<&str>) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(override_filter.unwrap_or(&config.filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter {directive:?}, falling back to info: {e}");
        EnvFilter::new("info")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_is_kept() {
        let filter = build_filter("dendrite_api=debug,warn");
        assert!(filter.to_string().contains("dendrite_api=debug"));
    }

    #[test]
    fn invalid_directive_falls_back_to_info() {
        let filter = build_filter("dendrite_api=loud");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig::default();
        let first = init(&config, Some("off"));
        assert!(first.is_ok());
        assert!(init(&config, None).is_err());
    }
}
