//! History Domain Types
//!
//! The bookkeeping core of a linear commit history:
//! - `CommitId` - Monotonic commit identity
//! - `Version` - Immutable text snapshot
//! - `HistoryChain` - Ordered chain with a movable cursor and id index
//! - `HistoryError` - Recoverable operation failures
//!
//! No branching, merging, diffing or persistence.

mod chain;
mod commit_id;
mod errors;
mod version;

pub use chain::{HistoryChain, LogEntry};
pub use commit_id::CommitId;
pub use errors::{HistoryError, HistoryResult};
pub use version::Version;
