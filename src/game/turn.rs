//! Placement protocol: preview, cancel, commit.
//!
//! Preview and commit share one placement path, so what a hovering player
//! sees is exactly what the commit produces (before Dying/Reviving settle).
//!
//! Rejected requests are silent no-ops that return an unchanged copy.

use tracing::{debug, info, trace};

use super::state::{Game, Preview};
use crate::core::{CellStatus, Player, Side};
use crate::rules::{detect_winner, finalize_compute, preview_compute};

impl Game {
    /// True if `(row, col)` is on the board and not owned by either side.
    ///
    /// Empty and Reviving cells are placeable.
    #[must_use]
    pub fn can_place(&self, row: usize, col: usize) -> bool {
        self.board.get(row, col).is_some_and(|s| !s.is_owned())
    }

    /// Tentatively place a stone for `side` at `(row, col)`.
    ///
    /// Replaces any pending preview. Outside seeding the whole board is
    /// stepped (without settling) so it shows the consequences of the move.
    #[must_use]
    pub fn preview(&self, row: usize, col: usize, side: Side) -> Game {
        let mut next = self.clone();
        next.place_preview(row, col, side);
        next
    }

    /// Remove the pending preview, if any.
    #[must_use]
    pub fn cancel_preview(&self) -> Game {
        let mut next = self.clone();
        next.clear_preview();
        next
    }

    /// Play the side to move at `(row, col)`.
    ///
    /// A cell holding the pending preview stone is committed as previewed.
    /// Any other unplaceable target leaves the game unchanged.
    #[must_use]
    pub fn commit(&self, row: usize, col: usize) -> Game {
        if self.is_over() {
            trace!(row, col, "commit ignored: game over");
            return self.clone();
        }

        let mut next = self.clone();
        if next.can_place(row, col) {
            next.place_preview(row, col, next.side);
        }

        match next.preview {
            Some(p) if p.row == row && p.col == col => {}
            _ => {
                trace!(row, col, "commit ignored: cell not placeable");
                return self.clone();
            }
        }

        let mover = next.side;
        let topology = next.topology();
        next.undo_applied = false;
        next.side = mover.opponent();
        next.preview = None;

        if !next.is_seeding() {
            next.board = finalize_compute(&next.board, topology);
            next.set_winner(detect_winner(&next.board));
        }

        next.move_number += 1;
        next.history.push(next.board.clone());

        debug!(
            side = %mover,
            row,
            col,
            move_number = next.move_number,
            phase = ?next.phase(),
            "move committed"
        );
        next
    }

    pub(super) fn place_preview(&mut self, row: usize, col: usize, side: Side) {
        if self.is_over() {
            trace!(row, col, "preview ignored: game over");
            return;
        }
        if !self.can_place(row, col) {
            trace!(row, col, "preview ignored: cell not placeable");
            return;
        }

        self.clear_preview();

        let previous = self.board.get(row, col).unwrap_or_default();
        self.board.set(row, col, CellStatus::stable(side));
        self.preview = Some(Preview { row, col, previous });

        if !self.is_seeding() {
            self.board = preview_compute(&self.board, self.topology());
        }
        trace!(%side, row, col, "preview placed");
    }

    pub(super) fn clear_preview(&mut self) {
        let Some(preview) = self.preview.take() else {
            return;
        };

        self.board.set(preview.row, preview.col, preview.previous);
        if !self.is_seeding() {
            self.board = preview_compute(&self.board, self.topology());
        }
        trace!(row = preview.row, col = preview.col, "preview cleared");
    }

    pub(super) fn set_winner(&mut self, winner: Player) {
        if winner != self.winner && !winner.is_none() {
            info!(%winner, move_number = self.move_number, "game over");
        }
        self.winner = winner;
    }
}
