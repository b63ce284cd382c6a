//! Configuration errors

use std::io;
use std::path::PathBuf;

use crate::syntax::SyntaxError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("Invalid config: syntax is \"custom\" but [custom_syntax] is missing")]
    MissingCustomSyntax,

    #[error("Invalid config: {0}")]
    Syntax(#[from] SyntaxError),
}
