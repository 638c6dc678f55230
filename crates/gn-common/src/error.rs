//! Error types for Genesis CLI.

use thiserror::Error;

/// Result type alias for Genesis CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Genesis CLI.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown configuration key: {key}")]
    UnknownConfigKey { key: String },

    #[error("invalid value for configuration key {key}: {reason}")]
    InvalidConfigValue { key: String, reason: String },

    // Validation errors (20-29)
    #[error("validation failed with {count} error(s)")]
    ValidationFailed { count: usize },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::UnknownConfigKey { .. } => 11,
            Error::InvalidConfigValue { .. } => 12,
            Error::ValidationFailed { .. } => 20,
            Error::UnknownTemplate(_) => 21,
            Error::UnknownFeature(_) => 22,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Whether the error was caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(self.code(), 11..=12 | 20..=29)
    }
}
