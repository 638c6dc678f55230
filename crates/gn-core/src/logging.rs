//! Structured logging setup.
//!
//! Logs go to stderr so stdout stays clean for command output. Level
//! precedence:
//! - `RUST_LOG`, when set and parseable
//! - `debug`, when `--verbose` or `debug_mode` is on
//! - the configured `log_level` (`DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL`)

use clap::ValueEnum;
use gn_config::CliConfig;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Inputs for `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub verbose: bool,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            verbose: false,
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    /// Derive logging settings from the effective config and CLI flags.
    pub fn from_cli(config: &CliConfig, verbose_flag: bool, format: LogFormat) -> Self {
        Self {
            level: config.log_level.clone(),
            verbose: verbose_flag || config.debug_mode,
            format,
        }
    }

    /// Filter directive used when `RUST_LOG` is absent.
    pub fn directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            level_directive(&self.level)
        }
    }
}

/// Map a configured level name onto a tracing directive.
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }
    Ok(())
}
