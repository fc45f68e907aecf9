//! Limited undo.
//!
//! An undo takes back one full round: the last move of each side. The side
//! to move therefore stays the same, and pays for the undo from its own
//! quota. Two undos in a row are not allowed; a commit re-arms it.

use tracing::{debug, trace};

use super::state::Game;
use crate::rules::detect_winner;

impl Game {
    /// True if `undo` would take effect.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.preview.is_none()
            && !self.undo_applied
            && self.winner.is_none()
            && self.move_number >= 3
            && self.undos[self.side].is_available()
    }

    /// Roll back the last two commits.
    #[must_use]
    pub fn undo(&self) -> Game {
        if !self.can_undo() {
            trace!(move_number = self.move_number, "undo ignored");
            return self.clone();
        }

        let mut next = self.clone();
        let Some(board) = next.history.rollback_round() else {
            return self.clone();
        };

        let side = next.side;
        next.undos[side] = next.undos[side].consume();
        next.undo_applied = true;
        next.move_number -= 2;
        next.board = board;

        if !next.is_seeding() {
            next.set_winner(detect_winner(&next.board));
        }

        debug!(
            %side,
            move_number = next.move_number,
            undos_left = %next.undos[side],
            "round undone"
        );
        next
    }
}
