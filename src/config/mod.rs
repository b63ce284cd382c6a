//! Configuration management for tagfmt

mod error;
mod io;
mod types;

pub use error::ConfigError;
pub use types::*;

use std::path::{Path, PathBuf};

use crate::automaton::Options;
use crate::syntax::TagSyntax;

impl Config {
    /// Get the config file path (~/.config/tagfmt/config.toml)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/tagfmt)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        io::load_from(path)
    }

    /// Resolve the configured syntax: a preset by name, or the custom table.
    pub fn syntax(&self) -> Result<TagSyntax, ConfigError> {
        if self.format.syntax == CUSTOM_SYNTAX_NAME {
            let custom = self
                .custom_syntax
                .as_ref()
                .ok_or(ConfigError::MissingCustomSyntax)?;
            return Ok(TagSyntax::custom(
                custom.open.as_str(),
                custom.open_end.as_str(),
                custom.close.as_str(),
            )?);
        }
        Ok(TagSyntax::find(&self.format.syntax)?.clone())
    }

    /// Automaton switches as configured, before command-line overrides.
    pub fn options(&self) -> Options {
        Options {
            strip: self.format.strip,
            escape: self.format.escape,
            sanitize: self.format.sanitize,
        }
    }
}
