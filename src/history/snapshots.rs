//! Settled board snapshots, one per completed move.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Append-only log of settled boards.
///
/// Entry 0 is the initial empty board, so a fresh log has length 1 and
/// `len() == move number` holds between commits.
///
/// Backed by `im::Vector`: cloning a `History` is O(1) and clones share
/// every snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vector<Board>,
}

impl History {
    /// Start a log with the initial board.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        let mut boards = Vector::new();
        boards.push_back(initial);
        Self { boards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn top(&self) -> Option<&Board> {
        self.boards.back()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Iterate from the initial board to the latest.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Underlying persistent vector.
    #[must_use]
    pub fn boards(&self) -> &Vector<Board> {
        &self.boards
    }

    /// Record a settled board.
    pub fn push(&mut self, board: Board) {
        debug_assert!(board.is_settled(), "history only stores settled boards");
        self.boards.push_back(board);
    }

    /// Drop the last two snapshots (one full round).
    ///
    /// Returns a copy of the new top, or `None` (and leaves the log
    /// untouched) when fewer than three snapshots exist.
    pub fn rollback_round(&mut self) -> Option<Board> {
        if self.boards.len() < 3 {
            return None;
        }
        self.boards.truncate(self.boards.len() - 2);
        self.boards.back().cloned()
    }
}
