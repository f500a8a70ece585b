//! Interactive numbered menu
//!
//! 1=commit, 2=undo, 3=redo, 4=log, 5=checkout, 6=exit.
//! Undo is silent on success; every other outcome prints one message.
//! End of input exits the same way as choice 6.

use std::io::{BufRead, Write};

use chrono::Local;

use crate::history::{CommitId, HistoryError, Version};
use crate::observability::{log_event_with_fields, Event};

use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::read_line;
use super::session::Session;

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Commit,
    Undo,
    Redo,
    Log,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line such as " 3 ". Returns None for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(Self::Commit),
            2 => Some(Self::Undo),
            3 => Some(Self::Redo),
            4 => Some(Self::Log),
            5 => Some(Self::Checkout),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
======= VERSION CONTROL MENU =======
1. Commit a new version
2. Undo (checkout previous commit)
3. Redo (checkout next commit)
4. Show commit history (log)
5. Checkout commit by ID
6. Exit";

/// Run the menu loop until exit or end of input
pub fn run_menu<R: BufRead, W: Write>(
    config: &Config,
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> CliResult<()> {
    loop {
        writeln!(output, "\n{}", MENU)?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Commit) => {
                write!(output, "Enter commit message/content: ")?;
                output.flush()?;
                let Some(content) = read_line(&mut input)? else {
                    break;
                };
                let version = session.commit(&content);
                writeln!(
                    output,
                    "\n[{} {}] {}",
                    config.branch_name,
                    version.id(),
                    version.content()
                )?;
            }
            Some(MenuChoice::Undo) => {
                if let Err(e) = session.undo() {
                    writeln!(output, "\n{}", failure_message(&e))?;
                }
            }
            Some(MenuChoice::Redo) => match session.redo() {
                Ok(version) => writeln!(
                    output,
                    "\nHEAD moved forward to commit {} -> \"{}\"",
                    version.id(),
                    version.content()
                )?,
                Err(e) => writeln!(output, "\n{}", failure_message(&e))?,
            },
            Some(MenuChoice::Log) => write_log(config, session, &mut output)?,
            Some(MenuChoice::Checkout) => {
                write!(output, "Enter commit ID: ")?;
                output.flush()?;
                let Some(raw) = read_line(&mut input)? else {
                    break;
                };
                let Ok(id) = raw.trim().parse::<u64>() else {
                    log_event_with_fields(
                        Event::RequestMalformed,
                        &[("input", raw.as_str()), ("reason", "commit id is not a number")],
                    );
                    writeln!(output, "\nInvalid commit ID.")?;
                    continue;
                };
                match session.checkout(CommitId::new(id)) {
                    Ok(version) => writeln!(
                        output,
                        "\nSwitched to commit {} -> \"{}\"",
                        version.id(),
                        version.content()
                    )?,
                    Err(e) => writeln!(output, "\n{}", failure_message(&e))?,
                }
            }
            Some(MenuChoice::Exit) => break,
            None => {
                log_event_with_fields(
                    Event::RequestMalformed,
                    &[("input", line.as_str()), ("reason", "unknown menu choice")],
                );
                writeln!(output, "Invalid choice! Try again.")?;
            }
        }
    }

    writeln!(output, "\nExiting. Goodbye!")?;
    output.flush()?;
    Ok(())
}

/// Menu wording for each history failure
fn failure_message(error: &HistoryError) -> String {
    match error {
        HistoryError::UnknownCommitId(_) => "Invalid commit ID.".to_string(),
        other => other.to_string(),
    }
}

fn write_log<W: Write>(config: &Config, session: &Session, output: &mut W) -> CliResult<()> {
    let entries = session.chain().log();
    if entries.is_empty() {
        writeln!(output, "\nNo commits yet.")?;
        return Ok(());
    }

    writeln!(output, "\n=== Commit History (latest on top) ===")?;
    for entry in entries {
        write!(output, "commit {}", entry.version.id())?;
        if entry.is_current {
            write!(output, " (HEAD -> {})", config.branch_name)?;
        }
        writeln!(output)?;
        writeln!(output, "Date:   {}", format_date(config, entry.version)?)?;
        writeln!(output, "Message: {}", entry.version.content())?;
        writeln!(output)?;
    }
    Ok(())
}

/// chrono only rejects a bad pattern while formatting, so this must not panic
fn format_date(config: &Config, version: &Version) -> CliResult<String> {
    let local = version.created_at().with_timezone(&Local);
    let formatted = local.format(&config.timestamp_format);
    let mut date = String::new();
    std::fmt::Write::write_fmt(&mut date, format_args!("{}", formatted)).map_err(|_| {
        CliError::config_error(format!(
            "Invalid timestamp_format: '{}'",
            config.timestamp_format
        ))
    })?;
    Ok(date)
}
