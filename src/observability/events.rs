//! Observable events for verchain
//!
//! Events are explicit and typed.

use std::fmt;

use super::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Session loop begins
    SessionStart,
    /// Session loop ended
    SessionEnd,
    /// Configuration loaded
    ConfigLoaded,
    /// New version committed
    CommitCreated,
    /// A commit discarded versions ahead of the cursor
    HistoryTruncated,
    /// Undo, redo or checkout moved the cursor
    CursorMoved,
    /// A history operation failed
    OperationRejected,
    /// Unparseable menu choice or batch request
    RequestMalformed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CommitCreated => "COMMIT_CREATED",
            Event::HistoryTruncated => "HISTORY_TRUNCATED",
            Event::CursorMoved => "CURSOR_MOVED",
            Event::OperationRejected => "OPERATION_REJECTED",
            Event::RequestMalformed => "REQUEST_MALFORMED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::CursorMoved => Severity::Trace,
            Event::HistoryTruncated | Event::OperationRejected | Event::RequestMalformed => {
                Severity::Warn
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        for event in [
            Event::SessionStart,
            Event::SessionEnd,
            Event::ConfigLoaded,
            Event::CommitCreated,
            Event::HistoryTruncated,
            Event::CursorMoved,
            Event::OperationRejected,
            Event::RequestMalformed,
        ] {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
            assert_eq!(event.to_string(), name);
        }
    }

    #[test]
    fn test_rejections_are_warnings() {
        assert_eq!(Event::OperationRejected.severity(), Severity::Warn);
        assert_eq!(Event::CommitCreated.severity(), Severity::Info);
        assert_eq!(Event::CursorMoved.severity(), Severity::Trace);
    }
}
