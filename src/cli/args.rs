//! CLI argument definitions using clap
//!
//! Commands:
//! - verchain [--config <path>] [menu]
//! - verchain [--config <path>] batch

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// verchain - in-memory linear version history
#[derive(Parser, Debug)]
#[command(name = "verchain")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Interactive numbered menu
    #[default]
    Menu,

    /// Read JSON requests from stdin, one per line
    Batch,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
