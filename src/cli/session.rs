//! Session - one user's history chain plus event logging
//!
//! Wraps every history operation so that menu and batch front ends log
//! the same events. The chain itself stays free of I/O.

use crate::history::{CommitId, HistoryChain, HistoryResult, Version};
use crate::observability::{log_event_with_fields, Event};

/// Owns the history chain for the lifetime of a CLI session.
#[derive(Debug, Default)]
pub struct Session {
    chain: HistoryChain,
}

impl Session {
    /// Creates a session over an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the chain: log, current version and lookups.
    pub fn chain(&self) -> &HistoryChain {
        &self.chain
    }

    pub fn commit(&mut self, content: &str) -> &Version {
        if let Some(fields) = self.truncation_fields() {
            let fields: Vec<(&str, &str)> =
                fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
            log_event_with_fields(Event::HistoryTruncated, &fields);
        }

        let version = self.chain.commit(content);
        let id = version.id().to_string();
        log_event_with_fields(Event::CommitCreated, &[("commit_id", id.as_str())]);
        version
    }

    /// Fields of the truncation event a commit right now would log, if any.
    fn truncation_fields(&self) -> Option<[(&'static str, String); 2]> {
        let discarded = self.chain.pending_redo();
        if discarded == 0 {
            return None;
        }
        let after = self.chain.current()?.id();
        Some([
            ("after_commit", after.to_string()),
            ("discarded", discarded.to_string()),
        ])
    }

    pub fn undo(&mut self) -> HistoryResult<&Version> {
        let result = self.chain.undo();
        observe("undo", &result);
        result
    }

    pub fn redo(&mut self) -> HistoryResult<&Version> {
        let result = self.chain.redo();
        observe("redo", &result);
        result
    }

    pub fn checkout(&mut self, id: CommitId) -> HistoryResult<&Version> {
        let result = self.chain.checkout(id);
        observe("checkout", &result);
        result
    }

}

fn observe(operation: &str, result: &HistoryResult<&Version>) {
    match result {
        Ok(version) => {
            let id = version.id().to_string();
            log_event_with_fields(
                Event::CursorMoved,
                &[("commit_id", id.as_str()), ("operation", operation)],
            )
        }
        Err(e) => log_event_with_fields(
            Event::OperationRejected,
            &[("code", e.code()), ("operation", operation)],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryError;
    use crate::observability::{capture_log, Event};

    #[test]
    fn test_session_delegates_to_chain() {
        let mut session = Session::new();
        session.commit("a");
        session.commit("b");

        assert_eq!(session.undo().unwrap().content(), "a");
        assert_eq!(session.redo().unwrap().content(), "b");
        assert_eq!(session.chain().current().unwrap().id(), CommitId::new(2));
        assert_eq!(session.chain().log().len(), 2);
    }

    #[test]
    fn test_session_commit_after_undo_truncates() {
        let mut session = Session::new();
        session.commit("a");
        session.commit("b");
        session.undo().unwrap();
        session.commit("c");

        assert_eq!(session.chain().path_len(), 2);
        assert_eq!(
            session.checkout(CommitId::new(2)),
            Err(HistoryError::DetachedCommitId(CommitId::new(2)))
        );
    }

    #[test]
    fn test_truncation_event_fields() {
        let mut session = Session::new();
        session.commit("a");
        session.commit("b");
        session.commit("c");
        assert!(session.truncation_fields().is_none());

        session.undo().unwrap();
        session.undo().unwrap();
        let fields = session.truncation_fields().unwrap();
        assert_eq!(
            fields,
            [
                ("after_commit", "1".to_string()),
                ("discarded", "2".to_string()),
            ]
        );

        let refs: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let line = capture_log(
            Event::HistoryTruncated.severity(),
            Event::HistoryTruncated.as_str(),
            &refs,
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "HISTORY_TRUNCATED");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["after_commit"], "1");
        assert_eq!(parsed["discarded"], "2");

        session.commit("d");
        assert!(session.truncation_fields().is_none());
        assert_eq!(session.chain().path_len(), 2);
    }
}
