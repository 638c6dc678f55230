//! Config file location.

use std::path::{Path, PathBuf};

use crate::env::EnvSource;

/// Directory under the user's home holding CLI state.
pub const CONFIG_DIR_NAME: &str = ".genesis-cli";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that relocates the config file.
pub const CONFIG_PATH_ENV: &str = "GENESIS_CLI_CONFIG";

/// `<home>/.genesis-cli/config.json`, falling back to the working directory
/// when no home directory can be determined.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Resolve the config file path: explicit flag, then environment, then default.
pub fn resolve_config_path(explicit: Option<&Path>, env: &dyn EnvSource) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env.var(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => default_config_path(),
    }
}
