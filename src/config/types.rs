//! Configuration type definitions and defaults

use serde::Deserialize;

/// Name that selects the `[custom_syntax]` table instead of a preset.
pub const CUSTOM_SYNTAX_NAME: &str = "custom";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
    /// Delimiters used when `format.syntax = "custom"`
    #[serde(default)]
    pub custom_syntax: Option<CustomSyntaxConfig>,
}

/// Defaults for a formatting run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// Preset name, or "custom"
    #[serde(default = "default_syntax")]
    pub syntax: String,
    #[serde(default)]
    pub strip: bool,
    #[serde(default)]
    pub escape: bool,
    #[serde(default = "default_sanitize")]
    pub sanitize: bool,
}

pub fn default_syntax() -> String {
    "classic".to_string()
}

pub fn default_sanitize() -> bool {
    true
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            syntax: default_syntax(),
            strip: false,
            escape: false,
            sanitize: default_sanitize(),
        }
    }
}

/// User-defined delimiters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomSyntaxConfig {
    pub open: String,
    pub open_end: String,
    pub close: String,
}
