//! CLI command implementations
//!
//! Boot order for every command:
//! 1. Load configuration (defaults when no `--config`)
//! 2. Apply the configured log level
//! 3. Build a fresh session and hand it stdin/stdout
//!
//! The history lives only as long as the process.

use std::io;

use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::args::{Cli, Command};
use super::batch::run_batch;
use super::config::Config;
use super::errors::CliResult;
use super::menu::run_menu;
use super::session::Session;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    Logger::set_min_severity(config.log_severity());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("branch", config.branch_name.as_str()),
            ("log_level", config.log_level.as_str()),
        ],
    );

    let command = cli.command.unwrap_or_default();
    let mut session = Session::new();

    log_event_with_fields(Event::SessionStart, &[("mode", mode_name(command))]);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = match command {
        Command::Menu => run_menu(&config, &mut session, stdin.lock(), stdout.lock()),
        Command::Batch => run_batch(&mut session, stdin.lock(), stdout.lock()),
    };
    log_event(Event::SessionEnd);

    result
}

fn mode_name(command: Command) -> &'static str {
    match command {
        Command::Menu => "menu",
        Command::Batch => "batch",
    }
}
