//! Command handlers for the tagfmt CLI.
//!
//! The dispatch logic remains in main.rs.

pub mod completions;
pub mod format;
pub mod info;

use std::io;

use anyhow::Result;

use tagfmt::cli::Cli;
use tagfmt::{Config, TagSyntax};

/// Syntax for this run: the command line wins over the config file.
pub fn resolve_syntax(cli: &Cli, config: &Config) -> Result<TagSyntax> {
    match cli.syntax_override() {
        Some(syntax) => Ok(syntax?),
        None => Ok(config.syntax()?),
    }
}

/// Treat a closed stdout as a normal end of output.
pub fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
