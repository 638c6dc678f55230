//! Configuration errors.
//!
//! These only escape from the explicit file APIs (`ConfigStore::read_file`,
//! `ConfigStore::persist`) and from field-level setters. The high-level
//! store operations log them and fall back.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config file {path} must contain a JSON object at the top level")]
    InvalidStructure { path: PathBuf },

    #[error("unknown configuration field: {0}")]
    UnknownField(String),

    #[error("field {field} expects a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
}

impl From<ConfigError> for gn_common::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => gn_common::Error::Io(e),
            ConfigError::Json(e) => gn_common::Error::Json(e),
            ConfigError::UnknownField(key) => gn_common::Error::UnknownConfigKey { key },
            ConfigError::TypeMismatch { field, expected } => {
                gn_common::Error::InvalidConfigValue {
                    key: field,
                    reason: format!("expected a {expected}"),
                }
            }
            other @ ConfigError::InvalidStructure { .. } => {
                gn_common::Error::Config(other.to_string())
            }
        }
    }
}
