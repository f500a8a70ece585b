//! Observability for verchain
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and history events
//!
//! Observability is read-only: it never changes what an operation does.
//!
//! ```ignore
//! use verchain::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::CommitCreated, &[("commit_id", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_log;

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::SessionStart);
        log_event_with_fields(Event::CommitCreated, &[("commit_id", "1")]);
    }
}
