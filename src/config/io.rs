//! Configuration I/O operations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use super::types::Config;

/// Get the config file path (~/.config/tagfmt/config.toml)
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the config directory path (~/.config/tagfmt)
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".config").join("tagfmt"))
}

/// Load configuration from the default location, or return defaults if not found
pub fn load() -> Result<Config, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        load_from(&path)
    } else {
        debug!(path = %path.display(), "no config file, using defaults");
        Ok(Config::default())
    }
}

/// Load and validate configuration from an explicit file
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    config.syntax()?;
    debug!(path = %path.display(), syntax = %config.format.syntax, "loaded config");
    Ok(config)
}
