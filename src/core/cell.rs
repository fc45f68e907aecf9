//! Per-cell status values.
//!
//! A cell is empty or owned by one side. Owned and empty cells can carry a
//! transient marker produced by the automaton:
//! - `Dying`: owned now, empty after the move is finalized
//! - `Reviving`: empty now, owned after the move is finalized
//!
//! Transient statuses only live on the working board. Settled snapshots
//! hold `None` and the two stable statuses.

use serde::{Deserialize, Serialize};

use super::player::{Player, Side};

/// Status of a single board cell.
///
/// Discriminants are stable cell codes (used by bindings and renderers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellStatus {
    #[default]
    None = 0,
    Player1 = 1,
    Player1Dying = 2,
    Player1Reviving = 3,
    Player2 = 4,
    Player2Dying = 5,
    Player2Reviving = 6,
}

impl CellStatus {
    /// Stable (alive, settled) status for a side.
    #[must_use]
    pub const fn stable(side: Side) -> Self {
        match side {
            Side::Player1 => CellStatus::Player1,
            Side::Player2 => CellStatus::Player2,
        }
    }

    #[must_use]
    pub const fn dying(side: Side) -> Self {
        match side {
            Side::Player1 => CellStatus::Player1Dying,
            Side::Player2 => CellStatus::Player2Dying,
        }
    }

    #[must_use]
    pub const fn reviving(side: Side) -> Self {
        match side {
            Side::Player1 => CellStatus::Player1Reviving,
            Side::Player2 => CellStatus::Player2Reviving,
        }
    }

    /// Side currently owning the cell.
    ///
    /// Stable and Dying cells are owned. Reviving cells are not owned yet.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            CellStatus::Player1 | CellStatus::Player1Dying => Some(Side::Player1),
            CellStatus::Player2 | CellStatus::Player2Dying => Some(Side::Player2),
            _ => None,
        }
    }

    /// Owner as a `Player` value (`Player::None` when unowned).
    #[must_use]
    pub fn player(self) -> Player {
        self.owner().map_or(Player::None, Player::from)
    }

    #[must_use]
    pub fn is_owned_by(self, side: Side) -> bool {
        self.owner() == Some(side)
    }

    #[must_use]
    pub const fn is_owned(self) -> bool {
        self.owner().is_some()
    }

    /// True for Dying and Reviving.
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            CellStatus::Player1Dying
                | CellStatus::Player1Reviving
                | CellStatus::Player2Dying
                | CellStatus::Player2Reviving
        )
    }

    /// Numeric cell code (0..=6).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellStatus::None),
            1 => Some(CellStatus::Player1),
            2 => Some(CellStatus::Player1Dying),
            3 => Some(CellStatus::Player1Reviving),
            4 => Some(CellStatus::Player2),
            5 => Some(CellStatus::Player2Dying),
            6 => Some(CellStatus::Player2Reviving),
            _ => None,
        }
    }

    /// Single-character glyph used by the text board format.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CellStatus::None => '.',
            CellStatus::Player1 => 'X',
            CellStatus::Player1Dying => 'x',
            CellStatus::Player1Reviving => '+',
            CellStatus::Player2 => 'O',
            CellStatus::Player2Dying => 'o',
            CellStatus::Player2Reviving => '*',
        }
    }

    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(CellStatus::None),
            'X' => Some(CellStatus::Player1),
            'x' => Some(CellStatus::Player1Dying),
            '+' => Some(CellStatus::Player1Reviving),
            'O' => Some(CellStatus::Player2),
            'o' => Some(CellStatus::Player2Dying),
            '*' => Some(CellStatus::Player2Reviving),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellStatus; 7] = [
        CellStatus::None,
        CellStatus::Player1,
        CellStatus::Player1Dying,
        CellStatus::Player1Reviving,
        CellStatus::Player2,
        CellStatus::Player2Dying,
        CellStatus::Player2Reviving,
    ];

    #[test]
    fn test_ownership() {
        assert_eq!(CellStatus::Player1.owner(), Some(Side::Player1));
        assert_eq!(CellStatus::Player1Dying.owner(), Some(Side::Player1));
        assert_eq!(CellStatus::Player1Reviving.owner(), None);
        assert_eq!(CellStatus::Player2Dying.owner(), Some(Side::Player2));
        assert_eq!(CellStatus::Player2Reviving.owner(), None);
        assert_eq!(CellStatus::None.owner(), None);

        assert_eq!(CellStatus::Player2Dying.player(), Player::Player2);
        assert_eq!(CellStatus::Player1Reviving.player(), Player::None);
    }

    #[test]
    fn test_constructors_match_side() {
        for side in Side::both() {
            assert!(CellStatus::stable(side).is_owned_by(side));
            assert!(CellStatus::dying(side).is_owned_by(side));
            assert!(!CellStatus::reviving(side).is_owned());
            assert!(!CellStatus::stable(side).is_owned_by(side.opponent()));
        }
    }

    #[test]
    fn test_transient() {
        let transient: Vec<_> = ALL.iter().filter(|s| s.is_transient()).collect();
        assert_eq!(transient.len(), 4);
        assert!(!CellStatus::None.is_transient());
        assert!(!CellStatus::Player1.is_transient());
        assert!(!CellStatus::Player2.is_transient());
    }

    #[test]
    fn test_codes_and_glyphs() {
        for (i, status) in ALL.iter().enumerate() {
            assert_eq!(status.code() as usize, i);
            assert_eq!(CellStatus::from_code(status.code()), Some(*status));
            assert_eq!(CellStatus::from_glyph(status.glyph()), Some(*status));
        }
        assert_eq!(CellStatus::from_code(7), None);
        assert_eq!(CellStatus::from_glyph('?'), None);
    }
}
