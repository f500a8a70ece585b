//! # History Errors
//!
//! Every failure here is expected and recoverable. A failed operation
//! leaves the chain exactly as it was.

use thiserror::Error;

use super::CommitId;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// History operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo at the first version or on an empty chain
    #[error("No previous version available.")]
    NoPreviousVersion,

    /// Redo at the tail or on an empty chain
    #[error("No next version available.")]
    NoNextVersion,

    /// Checkout of an id that was never committed
    #[error("Invalid commit ID: {0}")]
    UnknownCommitId(CommitId),

    /// Checkout of a version that a later commit cut off the history path
    #[error("Commit {0} is no longer reachable.")]
    DetachedCommitId(CommitId),
}

impl HistoryError {
    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            HistoryError::NoPreviousVersion => "VERCHAIN_NO_PREVIOUS_VERSION",
            HistoryError::NoNextVersion => "VERCHAIN_NO_NEXT_VERSION",
            HistoryError::UnknownCommitId(_) => "VERCHAIN_UNKNOWN_COMMIT_ID",
            HistoryError::DetachedCommitId(_) => "VERCHAIN_DETACHED_COMMIT_ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            HistoryError::NoPreviousVersion,
            HistoryError::NoNextVersion,
            HistoryError::UnknownCommitId(CommitId::new(1)),
            HistoryError::DetachedCommitId(CommitId::new(1)),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_messages_name_the_id() {
        assert_eq!(
            HistoryError::UnknownCommitId(CommitId::new(7)).to_string(),
            "Invalid commit ID: 7"
        );
        assert_eq!(
            HistoryError::DetachedCommitId(CommitId::new(3)).to_string(),
            "Commit 3 is no longer reachable."
        );
    }
}
