//! Command-line driver for the block cursor.

pub mod cli;
pub mod commands;
pub mod start;

use anyhow::Result;
use blocknav_config::Settings;
use cli::{Cli, Command};

/// Load settings and dispatch the parsed command.
pub fn run(cli: Cli) -> Result<()> {
    let discovered = blocknav_config::discover();
    let settings = Settings::load_with_overrides(cli.config.as_deref(), discovered.as_deref())?;
    tracing::debug!(?settings, "loaded settings");

    match cli.command {
        Command::Walk(args) => commands::walk::run(args, &settings),
        Command::Stacks { layout } => commands::stacks::run(&layout),
        Command::Outline { layout } => commands::outline::run(&layout),
    }
}

#[cfg(test)]
mod test_utils;
