//! Environment-variable override layer.
//!
//! Overrides are applied on top of file-derived config and are never written
//! back to the file. A flag variable counts as set when it holds any
//! non-empty value.

use std::collections::HashMap;

use tracing::debug;

use crate::model::CliConfig;

pub const ENV_NO_BANNER: &str = "GENESIS_CLI_NO_BANNER";
pub const ENV_NO_INTERACTIVE: &str = "GENESIS_CLI_NO_INTERACTIVE";
pub const ENV_VERBOSE: &str = "GENESIS_CLI_VERBOSE";
pub const ENV_DEBUG: &str = "GENESIS_CLI_DEBUG";
pub const ENV_SKIP_DEPS: &str = "GENESIS_CLI_SKIP_DEPS";
pub const ENV_DEFAULT_TEMPLATE: &str = "GENESIS_CLI_DEFAULT_TEMPLATE";

/// Source of environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` holds a non-empty value.
    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some_and(|v| !v.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Apply environment overrides to `config`.
///
/// Returns the names of the variables that changed something, in the fixed
/// order they are consulted. The default-template override is not checked
/// against the template catalog here.
pub fn apply_env_overrides(config: &mut CliConfig, env: &dyn EnvSource) -> Vec<&'static str> {
    let mut applied = Vec::new();

    if env.is_set(ENV_NO_BANNER) {
        config.show_banner = false;
        applied.push(ENV_NO_BANNER);
    }
    if env.is_set(ENV_NO_INTERACTIVE) {
        config.interactive_mode = false;
        applied.push(ENV_NO_INTERACTIVE);
    }
    if env.is_set(ENV_VERBOSE) {
        config.verbose_output = true;
        applied.push(ENV_VERBOSE);
    }
    if env.is_set(ENV_DEBUG) {
        config.debug_mode = true;
        applied.push(ENV_DEBUG);
    }
    if env.is_set(ENV_SKIP_DEPS) {
        config.skip_dependency_check = true;
        applied.push(ENV_SKIP_DEPS);
    }
    if let Some(template) = env.var(ENV_DEFAULT_TEMPLATE).filter(|t| !t.is_empty()) {
        config.default_template = template;
        applied.push(ENV_DEFAULT_TEMPLATE);
    }

    if !applied.is_empty() {
        debug!(overrides = ?applied, "applied environment overrides");
    }
    applied
}
