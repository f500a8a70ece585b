//! HistoryChain - Linear commit history with a movable cursor
//!
//! Versions live in an append-only arena addressed by commit id, so the
//! arena doubles as the id index. Links between versions are stored as
//! ids, never as owning references.
//!
//! Invariants:
//! - Ids are assigned 1, 2, 3, ... and never reused
//! - The live path (head -> tail along `next`) is a simple linear path
//! - `current` is None iff the chain is empty, otherwise it is on the live path
//! - The arena never shrinks
//! - A commit always becomes both `current` and the tail

use chrono::{DateTime, Utc};

use super::{CommitId, HistoryError, HistoryResult, Version};

/// Arena slot: a version plus its position on the chain.
#[derive(Clone, Debug)]
struct Node {
    version: Version,
    prev: Option<CommitId>,
    next: Option<CommitId>,
    /// Set once a later commit cuts this node off the live path.
    detached: bool,
}

/// One line of `HistoryChain::log` output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry<'a> {
    pub version: &'a Version,
    pub is_current: bool,
}

/// An ordered chain of immutable versions with a cursor.
#[derive(Clone, Debug, Default)]
pub struct HistoryChain {
    nodes: Vec<Node>,
    head: Option<CommitId>,
    tail: Option<CommitId>,
    current: Option<CommitId>,
}

impl HistoryChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of versions ever committed, detached ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been committed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of versions on the live path from head to tail.
    pub fn path_len(&self) -> usize {
        self.nodes.iter().filter(|n| !n.detached).count()
    }

    /// The id the next commit will receive.
    #[inline]
    pub fn next_id(&self) -> CommitId {
        self.nodes
            .last()
            .map_or(CommitId::FIRST, |n| n.version.id().next())
    }

    /// Looks up any committed version by id, including detached ones.
    pub fn get(&self, id: CommitId) -> Option<&Version> {
        self.node(id).map(|n| &n.version)
    }

    /// The version under the cursor.
    pub fn current(&self) -> Option<&Version> {
        self.current.and_then(|id| self.get(id))
    }

    /// The earliest version.
    pub fn head(&self) -> Option<&Version> {
        self.head.and_then(|id| self.get(id))
    }

    /// The most recently linked version on the live path.
    pub fn tail(&self) -> Option<&Version> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Number of versions ahead of the cursor that `redo` could reach.
    ///
    /// These are exactly the versions the next commit will discard.
    pub fn pending_redo(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.current.and_then(|id| self.node(id)).and_then(|n| n.next);
        while let Some(id) = cursor {
            count += 1;
            cursor = self.node(id).and_then(|n| n.next);
        }
        count
    }

    /// Records a new snapshot after the cursor, stamped with the current time.
    pub fn commit(&mut self, content: impl Into<String>) -> &Version {
        self.commit_at(content, Utc::now())
    }

    /// Records a new snapshot after the cursor with an explicit timestamp.
    ///
    /// Any versions ahead of the cursor are cut off the live path. They stay
    /// in the index and remain visible through `get`.
    pub fn commit_at(&mut self, content: impl Into<String>, created_at: DateTime<Utc>) -> &Version {
        let id = self.next_id();

        if let Some(prev) = self.current {
            let discarded = self.node_mut(prev).and_then(|n| n.next.replace(id));
            self.detach_from(discarded);
        } else {
            self.head = Some(id);
        }

        self.nodes.push(Node {
            version: Version::new(id, content.into(), created_at),
            prev: self.current,
            next: None,
            detached: false,
        });
        self.tail = Some(id);
        self.current = Some(id);

        &self.nodes[self.nodes.len() - 1].version
    }

    /// Moves the cursor to its predecessor.
    pub fn undo(&mut self) -> HistoryResult<&Version> {
        let prev = self
            .current
            .and_then(|id| self.node(id))
            .and_then(|n| n.prev)
            .ok_or(HistoryError::NoPreviousVersion)?;
        self.move_to(prev)
    }

    /// Moves the cursor to its successor.
    pub fn redo(&mut self) -> HistoryResult<&Version> {
        let next = self
            .current
            .and_then(|id| self.node(id))
            .and_then(|n| n.next)
            .ok_or(HistoryError::NoNextVersion)?;
        self.move_to(next)
    }

    /// Jumps the cursor directly to `id`.
    pub fn checkout(&mut self, id: CommitId) -> HistoryResult<&Version> {
        let node = self.node(id).ok_or(HistoryError::UnknownCommitId(id))?;
        if node.detached {
            return Err(HistoryError::DetachedCommitId(id));
        }
        self.move_to(id)
    }

    /// Lists the live path from tail back to head, most recent first.
    ///
    /// Starts at the structural tail, not at the cursor, so versions ahead
    /// of the cursor are still listed after an undo.
    pub fn log(&self) -> Vec<LogEntry<'_>> {
        let mut entries = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.tail;
        while let Some(id) = cursor {
            let Some(node) = self.node(id) else { break };
            entries.push(LogEntry {
                version: &node.version,
                is_current: self.current == Some(id),
            });
            cursor = node.prev;
        }
        entries
    }

    fn move_to(&mut self, id: CommitId) -> HistoryResult<&Version> {
        let slot = id.slot().ok_or(HistoryError::UnknownCommitId(id))?;
        let node = self.nodes.get(slot).ok_or(HistoryError::UnknownCommitId(id))?;
        self.current = Some(id);
        Ok(&node.version)
    }

    /// Marks `start` and everything after it as off the live path.
    fn detach_from(&mut self, start: Option<CommitId>) {
        let mut cursor = start;
        while let Some(id) = cursor {
            let Some(node) = self.node_mut(id) else { break };
            node.detached = true;
            cursor = node.next;
        }
    }

    fn node(&self, id: CommitId) -> Option<&Node> {
        self.nodes.get(id.slot()?)
    }

    fn node_mut(&mut self, id: CommitId) -> Option<&mut Node> {
        self.nodes.get_mut(id.slot()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(chain: &HistoryChain) -> Vec<u64> {
        chain.log().iter().map(|e| e.version.id().value()).collect()
    }

    fn chain_of(contents: &[&str]) -> HistoryChain {
        let mut chain = HistoryChain::new();
        for content in contents {
            chain.commit(*content);
        }
        chain
    }

    #[test]
    fn test_empty_chain() {
        let chain = HistoryChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.current().is_none());
        assert!(chain.head().is_none());
        assert!(chain.tail().is_none());
        assert_eq!(chain.next_id(), CommitId::FIRST);
        assert!(chain.log().is_empty());
    }

    #[test]
    fn test_first_commit_becomes_head_tail_and_current() {
        let mut chain = HistoryChain::new();
        let id = chain.commit("a").id();

        assert_eq!(id, CommitId::FIRST);
        assert_eq!(chain.head().unwrap().id(), id);
        assert_eq!(chain.tail().unwrap().id(), id);
        assert_eq!(chain.current().unwrap().id(), id);
    }

    #[test]
    fn test_commit_accepts_empty_content() {
        let mut chain = HistoryChain::new();
        assert_eq!(chain.commit("").content(), "");
    }

    #[test]
    fn test_commit_at_keeps_timestamp() {
        let at = chrono::TimeZone::with_ymd_and_hms(&Utc, 2020, 1, 2, 3, 4, 5).unwrap();
        let mut chain = HistoryChain::new();
        assert_eq!(chain.commit_at("x", at).created_at(), at);
    }

    #[test]
    fn test_undo_redo_walk() {
        let mut chain = chain_of(&["a", "b", "c"]);

        assert_eq!(chain.undo().unwrap().id(), CommitId::new(2));
        assert_eq!(chain.undo().unwrap().id(), CommitId::new(1));
        assert_eq!(chain.undo(), Err(HistoryError::NoPreviousVersion));
        assert_eq!(chain.current().unwrap().id(), CommitId::new(1));

        assert_eq!(chain.redo().unwrap().content(), "b");
        assert_eq!(chain.redo().unwrap().content(), "c");
        assert_eq!(chain.redo(), Err(HistoryError::NoNextVersion));
        assert_eq!(chain.current().unwrap().id(), CommitId::new(3));
    }

    #[test]
    fn test_pending_redo_counts_future() {
        let mut chain = chain_of(&["a", "b", "c"]);
        assert_eq!(chain.pending_redo(), 0);
        chain.undo().unwrap();
        chain.undo().unwrap();
        assert_eq!(chain.pending_redo(), 2);
    }

    #[test]
    fn test_commit_after_undo_truncates() {
        let mut chain = chain_of(&["a", "b", "c"]);
        chain.undo().unwrap();
        let id = chain.commit("x").id();

        assert_eq!(id, CommitId::new(4));
        assert_eq!(ids(&chain), vec![4, 2, 1]);
        assert_eq!(chain.path_len(), 3);
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.get(CommitId::new(3)).unwrap().content(), "c");
        assert_eq!(chain.redo(), Err(HistoryError::NoNextVersion));
    }

    #[test]
    fn test_truncation_detaches_whole_future() {
        let mut chain = chain_of(&["a", "b", "c", "d"]);
        chain.checkout(CommitId::new(1)).unwrap();
        chain.commit("e");

        for id in [2, 3, 4] {
            assert_eq!(
                chain.checkout(CommitId::new(id)),
                Err(HistoryError::DetachedCommitId(CommitId::new(id)))
            );
        }
        assert_eq!(chain.current().unwrap().id(), CommitId::new(5));
    }

    #[test]
    fn test_checkout_unknown_and_zero() {
        let mut chain = chain_of(&["a"]);
        assert_eq!(
            chain.checkout(CommitId::new(0)),
            Err(HistoryError::UnknownCommitId(CommitId::new(0)))
        );
        assert_eq!(
            chain.checkout(CommitId::new(2)),
            Err(HistoryError::UnknownCommitId(CommitId::new(2)))
        );
        assert_eq!(chain.current().unwrap().id(), CommitId::FIRST);
    }

    #[test]
    fn test_checkout_forward_jump() {
        let mut chain = chain_of(&["a", "b", "c"]);
        chain.checkout(CommitId::new(1)).unwrap();
        assert_eq!(chain.checkout(CommitId::new(3)).unwrap().content(), "c");
        assert_eq!(chain.undo().unwrap().content(), "b");
    }

    #[test]
    fn test_log_flags_single_current() {
        let mut chain = chain_of(&["a", "b", "c"]);
        chain.checkout(CommitId::new(2)).unwrap();

        let log = chain.log();
        assert_eq!(log.len(), 3);
        let flagged: Vec<_> = log.iter().filter(|e| e.is_current).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].version.id(), CommitId::new(2));
    }
}
