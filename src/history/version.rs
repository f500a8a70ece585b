//! Version - Immutable text snapshot
//!
//! - Created only by `HistoryChain::commit`
//! - Never mutated after creation
//! - Content is opaque to the chain

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CommitId;

/// A single committed snapshot.
///
/// All fields are private to enforce immutability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Version {
    id: CommitId,
    content: String,
    created_at: DateTime<Utc>,
}

impl Version {
    pub(crate) fn new(id: CommitId, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            created_at,
        }
    }

    /// Returns the commit identity.
    #[inline]
    pub fn id(&self) -> CommitId {
        self.id
    }

    /// Returns the snapshot text.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the time the snapshot was committed.
    ///
    /// Display metadata only. Ordering is carried by `id`.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
