//! Tracing setup for the scripthub CLI
//!
//! Usage:
//!   scripthub --debug ...                      # Debug logging
//!   RUST_LOG=scripthub_core=trace scripthub    # Fine-grained log control
//!
//! Filter precedence: `RUST_LOG`, then `--debug`, then `[logging] level` from
//! the config file. Logs go to stderr so stdout stays pipeable.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Force debug level unless RUST_LOG is set
    pub debug: bool,
    /// Filter directive from the config file
    pub level: String,
}

fn filter_directive(config: &TracingConfig) -> &str {
    if config.debug {
        "debug"
    } else {
        &config.level
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(config)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_overrides_config_level() {
        let config = TracingConfig {
            debug: true,
            level: "warn".to_string(),
        };
        assert_eq!(filter_directive(&config), "debug");
    }

    #[test]
    fn config_level_used_without_debug() {
        let config = TracingConfig {
            debug: false,
            level: "scripthub_core=trace".to_string(),
        };
        assert_eq!(filter_directive(&config), "scripthub_core=trace");
    }
}
