//! CommitId - Monotonic commit identity
//!
//! - Assigned 1, 2, 3, ... in commit creation order
//! - Never reused, not even after undo or truncation
//! - Independent of wall-clock time

use std::fmt;

use serde::{Deserialize, Serialize};

/// A totally ordered commit identity.
///
/// Ordering reflects creation order only. It says nothing about where a
/// version sits relative to the cursor.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(u64);

impl CommitId {
    /// The id given to the first commit of a chain.
    pub const FIRST: CommitId = CommitId(1);

    /// Creates a CommitId with the given value.
    #[inline]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[inline]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Arena slot for this id, or None for the unassigned id 0.
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        usize::try_from(self.0).ok()?.checked_sub(1)
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
