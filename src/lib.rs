//! verchain - in-memory linear version history
//!
//! Records text snapshots as a linear chain of commits with a movable
//! cursor: undo, redo, direct checkout by id, and a most-recent-first log.

pub mod cli;
pub mod history;
pub mod observability;
