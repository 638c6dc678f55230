//! File-backed config store.
//!
//! Provides the effective `CliConfig` for one CLI invocation. The first
//! `load` reads and merges the JSON file; later calls return the cached
//! value until `save`, `update`, or `reset` replace it.
//!
//! # Fallback Behavior
//!
//! A missing, unreadable, or malformed file yields the built-in defaults.
//! A failed write is logged and the cached value is still replaced, so the
//! process keeps observing the intended settings. Only `read_file` and
//! `persist` report errors to the caller.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::env::{apply_env_overrides, EnvSource, ProcessEnv};
use crate::error::ConfigError;
use crate::merge::deep_merge;
use crate::model::CliConfig;

/// Result of `ConfigStore::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Fields that were set.
    pub applied: Vec<String>,
    /// Names outside the schema, or values of the wrong type.
    pub ignored: Vec<String>,
    /// Whether the file write succeeded.
    pub persisted: bool,
}

/// Cached config backed by a JSON file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    cached: Option<CliConfig>,
}

impl ConfigStore {
    /// Create a store for the given file. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a config has been loaded or saved in this store.
    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    /// Effective file-layer config: cached value, else file merged onto
    /// defaults, else defaults.
    pub fn load(&mut self) -> CliConfig {
        if let Some(cached) = &self.cached {
            return cached.clone();
        }

        let config = match self.read_file() {
            Ok(Some(config)) => {
                debug!(path = %self.path.display(), "config loaded");
                config
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                CliConfig::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "config unreadable, using defaults");
                CliConfig::default()
            }
        };

        self.cached = Some(config.clone());
        config
    }

    /// Read and merge the config file without touching the cache.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read_file(&self) -> Result<Option<CliConfig>, ConfigError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let parsed: Value = serde_json::from_str(&contents)?;
        if !parsed.is_object() {
            return Err(ConfigError::InvalidStructure {
                path: self.path.clone(),
            });
        }

        let mut merged = CliConfig::defaults_nested();
        deep_merge(&mut merged, &parsed);
        Ok(Some(CliConfig::from_nested(&merged)))
    }

    /// Replace the cached config and try to write it to disk.
    ///
    /// Returns whether the write succeeded. The cache is updated either way.
    pub fn save(&mut self, config: CliConfig) -> bool {
        let persisted = match self.persist(&config) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to persist config");
                false
            }
        };
        self.cached = Some(config);
        persisted
    }

    /// Write `config` in nested form, creating missing parent directories.
    pub fn persist(&self, config: &CliConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json = serde_json::to_vec_pretty(&config.to_nested())?;
        json.push(b'\n');

        // Write atomically
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            file.write_all(&json)?;
            file.flush()?;
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    /// Set the named fields on the current config and save it.
    ///
    /// Names outside the schema and values of the wrong type are skipped.
    pub fn update<I, K>(&mut self, fields: I) -> UpdateOutcome
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut config = self.load();
        let mut outcome = UpdateOutcome::default();

        for (key, value) in fields {
            let key = key.into();
            match config.set_field(&key, &value) {
                Ok(()) => outcome.applied.push(key),
                Err(e) => {
                    debug!(key = %key, error = %e, "skipping config update");
                    outcome.ignored.push(key);
                }
            }
        }

        outcome.persisted = self.save(config);
        outcome
    }

    /// Restore and save the built-in defaults. Returns whether the write
    /// succeeded, as `save` does.
    pub fn reset(&mut self) -> bool {
        self.save(CliConfig::default())
    }

    /// Value of one field, or `default` for names outside the schema.
    pub fn get_value(&mut self, key: &str, default: Value) -> Value {
        self.load().get_field(key).unwrap_or(default)
    }

    /// Effective config with process environment overrides applied.
    ///
    /// Overrides are not written back to the file.
    pub fn load_from_environment(&mut self) -> CliConfig {
        self.load_with_env(&ProcessEnv)
    }

    /// Effective config with overrides from `env` applied.
    pub fn load_with_env(&mut self, env: &dyn EnvSource) -> CliConfig {
        let mut config = self.load();
        apply_env_overrides(&mut config, env);
        config
    }
}
