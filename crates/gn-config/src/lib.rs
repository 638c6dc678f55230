//! Genesis CLI configuration loading and persistence.
//!
//! This crate provides:
//! - The flat `CliConfig` preference record and its five-section nested form
//! - Recursive merge of a config file onto the built-in defaults
//! - Environment-variable overrides layered on top of file values
//! - `ConfigStore`, which caches the effective config and persists it to JSON
//! - A JSON Schema describing the config file

pub mod env;
pub mod error;
pub mod merge;
pub mod model;
pub mod paths;
pub mod store;

pub use env::{apply_env_overrides, EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use merge::deep_merge;
pub use model::{config_schema, CliConfig, FieldKind, NestedConfig, Section};
pub use paths::{default_config_path, resolve_config_path};
pub use store::{ConfigStore, UpdateOutcome};
