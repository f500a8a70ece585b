//! CLI module for verchain
//!
//! Provides the command-line surface over the history core:
//! - menu: interactive numbered menu (default)
//! - batch: one JSON request per stdin line, one JSON response per line

mod args;
mod batch;
mod commands;
mod config;
mod errors;
mod io;
mod menu;
mod session;

pub use args::{Cli, Command};
pub use batch::{run_batch, Request};
pub use commands::{run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_line, write_error, write_response};
pub use menu::{run_menu, MenuChoice};
pub use session::Session;
