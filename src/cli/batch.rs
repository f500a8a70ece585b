//! JSON-lines batch mode
//!
//! Input: one JSON request per stdin line, e.g.
//! `{"op":"commit","content":"draft"}` or `{"op":"checkout","id":2}`.
//! Output: one JSON response per line, `{"status":"ok","data":...}` or
//! `{"status":"error","code":...,"message":...}`.
//!
//! A malformed request gets an error response and the loop continues.
//! I/O failures end the loop.

use std::io::{BufRead, Write};

use serde::Deserialize;
use serde_json::{json, Value};

use crate::history::{CommitId, HistoryResult, LogEntry, Version};
use crate::observability::{log_event_with_fields, Event};

use super::errors::CliResult;
use super::io::{read_line, write_error, write_response};
use super::session::Session;

const MALFORMED_REQUEST: &str = "VERCHAIN_MALFORMED_REQUEST";

/// A single batch request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Commit { content: String },
    Undo,
    Redo,
    Checkout { id: u64 },
    Log,
    Current,
}

/// Run the batch loop until end of input
pub fn run_batch<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> CliResult<()> {
    while let Some(line) = read_line(&mut input)? {
        if line.trim().is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<Request>(&line) {
            Ok(request) => request,
            Err(e) => {
                let reason = e.to_string();
                log_event_with_fields(Event::RequestMalformed, &[("reason", reason.as_str())]);
                write_error(&mut output, MALFORMED_REQUEST, &format!("Invalid request: {}", e))?;
                continue;
            }
        };

        match handle(session, request)? {
            Ok(data) => write_response(&mut output, data)?,
            Err(e) => write_error(&mut output, e.code(), &e.to_string())?,
        }
    }
    Ok(())
}

/// History failures are the inner result; serialization failures the outer
fn handle(session: &mut Session, request: Request) -> CliResult<HistoryResult<Value>> {
    match request {
        Request::Commit { content } => Ok(Ok(version_json(session.commit(&content))?)),
        Request::Undo => moved(session.undo()),
        Request::Redo => moved(session.redo()),
        Request::Checkout { id } => moved(session.checkout(CommitId::new(id))),
        Request::Log => Ok(Ok(log_json(&session.chain().log())?)),
        Request::Current => match session.chain().current() {
            Some(version) => Ok(Ok(version_json(version)?)),
            None => Ok(Ok(Value::Null)),
        },
    }
}

fn moved(result: HistoryResult<&Version>) -> CliResult<HistoryResult<Value>> {
    match result {
        Ok(version) => Ok(Ok(version_json(version)?)),
        Err(e) => Ok(Err(e)),
    }
}

fn version_json(version: &Version) -> CliResult<Value> {
    Ok(serde_json::to_value(version)?)
}

fn log_json(entries: &[LogEntry<'_>]) -> CliResult<Value> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut value = version_json(entry.version)?;
        if let Value::Object(map) = &mut value {
            map.insert("is_current".to_string(), json!(entry.is_current));
        }
        out.push(value);
    }
    Ok(Value::Array(out))
}
