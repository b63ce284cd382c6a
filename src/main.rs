//! tagfmt - CLI entry point

mod commands;

use anyhow::{Context, Result};
use clap::Parser;

use tagfmt::cli::Cli;
use tagfmt::{logging, Config};

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        return commands::completions::handle::<Cli>(shell);
    }
    if cli.version {
        return commands::info::version();
    }

    let config = Config::load().context("Failed to load configuration")?;

    if cli.legend {
        return commands::info::legend(&cli, &config);
    }
    commands::format::handle(&cli, &config)
}
