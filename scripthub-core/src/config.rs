//! Catalog configuration
//!
//! Loaded from `$SCRIPTHUB_CONFIG` or `~/.scripthub/config.toml`. Every
//! section and key is optional; a missing file means all defaults.
//!
//! ```toml
//! [storage]
//! seed = true
//!
//! [logging]
//! level = "info"
//!
//! [output]
//! format = "json"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "SCRIPTHUB_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Populate the sample catalog on startup
    pub seed: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl CatalogConfig {
    /// Load from the explicit path, else `$SCRIPTHUB_CONFIG`, else the default
    /// location. Missing files yield defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => env::var_os(CONFIG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(Self::config_path),
        };

        Self::load_from(&path)
    }

    /// Load a specific file, falling back to defaults when it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|e| CatalogError::config_parse(path, e))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse TOML config content.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Default config file path: ~/.scripthub/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".scripthub/config.toml")
    }
}
