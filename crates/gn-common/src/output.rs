//! Output format selection and the JSON envelope version.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version stamped into every JSON envelope as `schema_version`.
///
/// Bumped on the major component when an envelope field is removed or
/// changes type.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text for terminals.
    #[default]
    Human,
    /// Machine-readable JSON envelope.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
