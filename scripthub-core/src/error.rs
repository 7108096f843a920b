//! Structured error types for scripthub-core.
//!
//! Storage lookups never fail; absence is an `Option`. These errors cover the
//! library's fallible edges (config files, rendering) and give callers a
//! typed way to turn a missing entity into an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scripthub-core operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file could not be parsed
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Entity lookup came back empty
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },
}

/// Result type alias for scripthub-core operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a not-found error for an entity keyed by id or slug
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

/// Convert an optional lookup result into a `NotFound` error.
pub trait OptionExt<T> {
    fn or_not_found(self, entity: &'static str, key: impl ToString) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, entity: &'static str, key: impl ToString) -> Result<T> {
        self.ok_or_else(|| CatalogError::not_found(entity, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::not_found("script", 42);
        assert_eq!(err.to_string(), "script '42' not found");

        let err = CatalogError::not_found("category", "gui");
        assert_eq!(err.to_string(), "category 'gui' not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: CatalogError = io_err.into();

        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_or_not_found() {
        let found: Option<u8> = Some(1);
        assert_eq!(found.or_not_found("user", 1).unwrap(), 1);

        let missing: Option<u8> = None;
        let err = missing.or_not_found("user", 7).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { entity: "user", .. }));
    }
}
