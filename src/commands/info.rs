//! Version and legend output

use std::io::{self, Write};

use anyhow::Result;

use tagfmt::cli::{version_string, Cli};
use tagfmt::{texts, Config};

use super::{ignore_broken_pipe, resolve_syntax};

/// Print the version line.
pub fn version() -> Result<()> {
    println!("{}", version_string());
    Ok(())
}

/// Print the legend for the active syntax.
pub fn legend(cli: &Cli, config: &Config) -> Result<()> {
    let syntax = resolve_syntax(cli, config)?;
    let legend = texts::legend(&syntax);
    ignore_broken_pipe(io::stdout().lock().write_all(legend.as_bytes()))?;
    Ok(())
}
