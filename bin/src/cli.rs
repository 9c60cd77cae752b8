use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Walk a block workspace with the structural cursor
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file, overriding `<config_dir>/blocknav/config.toml`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file, or a directory to put it in
    #[arg(long, global = true, env = "BLOCKNAV_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a move script from a start location, printing each move
    Walk(WalkArgs),
    /// List the top-level stacks in workspace order
    Stacks {
        /// TOML workspace layout
        #[arg(long)]
        layout: PathBuf,
    },
    /// Print the whole block tree
    Outline {
        /// TOML workspace layout
        #[arg(long)]
        layout: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct WalkArgs {
    /// TOML workspace layout
    #[arg(long)]
    pub layout: PathBuf,

    /// Start location, e.g. `block:loop` or `field:loop.DO.times`
    #[arg(long)]
    pub start: String,

    /// Moves to make, e.g. `in, next*2, out`
    #[arg(long, conflicts_with = "script_file")]
    pub script: Option<String>,

    /// File holding the moves to make
    #[arg(long)]
    pub script_file: Option<PathBuf>,
}
