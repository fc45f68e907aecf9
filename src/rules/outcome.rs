//! Win detection.

use crate::core::{Board, Player, Side};

/// Winner implied by board ownership.
///
/// - nobody owns a cell: `Draw`
/// - only one side owns cells: that side
/// - both sides own cells: `None` (game continues)
#[must_use]
pub fn detect_winner(board: &Board) -> Player {
    let mut has_player1 = false;
    let mut has_player2 = false;

    for status in board.cells() {
        match status.owner() {
            Some(Side::Player1) => has_player1 = true,
            Some(Side::Player2) => has_player2 = true,
            None => {}
        }
        if has_player1 && has_player2 {
            return Player::None;
        }
    }

    match (has_player1, has_player2) {
        (false, false) => Player::Draw,
        (true, false) => Player::Player1,
        (false, true) => Player::Player2,
        (true, true) => Player::None,
    }
}
