pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".kubehint.toml";

/// Get the global config file path (~/.kubehint.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (project/.kubehint.toml)
pub fn local_config_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_FILE_NAME)
}

/// Load configuration.
///
/// An explicit file must exist and parse. Otherwise the local config in
/// `project_path` is tried first, then the global config, then defaults.
pub fn load_config(explicit: Option<&Path>, project_path: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    if let Some(path) = project_path {
        let local = local_config_path(path);
        if local.exists() {
            log::debug!("Using local config {}", local.display());
            return load_config_file(&local);
        }
    }

    if let Some(global) = global_config_path()
        && global.exists()
    {
        match load_config_file(&global) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("Ignoring global config {}: {}", global.display(), e),
        }
    }

    Ok(types::Config::default())
}

/// Load and parse a single TOML config file.
pub fn load_config_file(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let config: types::Config = toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    Ok(config)
}
