//! Format command handler: the default action.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use tagfmt::cli::Cli;
use tagfmt::{format_reader, format_units, texts, Config, Options};

use super::{ignore_broken_pipe, resolve_syntax};

/// Command-line switches layered over the configured defaults.
pub fn resolve_options(cli: &Cli, config: &Config) -> Options {
    let mut options = config.options();
    options.strip |= cli.strip;
    options.escape |= cli.escape;
    if cli.no_sanitize {
        options.sanitize = false;
    }
    options
}

/// Format the demo text, the positional strings, or stdin, in that order of precedence.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli, config: &Config) -> Result<()> {
    let syntax = resolve_syntax(cli, config)?;
    let options = resolve_options(cli, config);
    debug!(syntax = %syntax, ?options, "formatting");

    let out = io::stdout().lock();
    let result = if cli.demo {
        format_reader(texts::demo(&syntax).as_bytes(), out, &syntax, options)
    } else if cli.strings.is_empty() {
        format_reader(io::stdin().lock(), out, &syntax, options)
    } else {
        format_units(cli.string_units(), out, &syntax, options)
    };
    ignore_broken_pipe(result).context("Failed to write output")
}
