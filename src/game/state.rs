//! The game aggregate and its read surface.
//!
//! ## Value semantics
//!
//! Every operation takes `&self` and returns a new `Game`. A value a caller
//! still holds is never modified, so a front end can keep the previous
//! state around (for change detection or playback) at no risk. Cloning is
//! cheap: history snapshots are shared through `im`.
//!
//! ## Phases
//!
//! - `Seeding` while `move <= seeding_rounds * 2`: stones are placed as-is,
//!   no automaton step, no win check.
//! - `Active`: every commit steps the automaton and checks for a winner.
//! - `Ended` once a winner (or draw) is known: all operations are no-ops.

use serde::{Deserialize, Serialize};

use crate::core::{
    Board, CellStatus, ConfigError, Options, Player, Side, SideMap, StateError, UndoQuota,
};
use crate::history::History;
use crate::rules::{preview_compute, Topology};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Seeding,
    Active,
    Ended,
}

/// A tentative, not yet committed placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preview {
    pub row: usize,
    pub col: usize,
    /// Status of the cell before the preview stone was put there.
    pub previous: CellStatus,
}

/// Complete state of one game.
///
/// Deserializing rejects state the operations could never reach (see
/// `StateError`), so a loaded game is as safe to drive as a fresh one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameData")]
pub struct Game {
    pub(super) options: Options,
    pub(super) board: Board,
    pub(super) side: Side,
    pub(super) move_number: u32,
    pub(super) winner: Player,
    pub(super) history: History,
    pub(super) undos: SideMap<UndoQuota>,
    pub(super) undo_applied: bool,
    pub(super) preview: Option<Preview>,
}

/// Unchecked wire form of a `Game`.
#[derive(Deserialize)]
struct GameData {
    options: Options,
    board: Board,
    side: Side,
    move_number: u32,
    winner: Player,
    history: History,
    undos: SideMap<UndoQuota>,
    undo_applied: bool,
    preview: Option<Preview>,
}

impl TryFrom<GameData> for Game {
    type Error = StateError;

    fn try_from(data: GameData) -> Result<Self, Self::Error> {
        data.options.validate()?;
        let size = data.options.size;

        if data.board.size() != size {
            return Err(StateError::BoardSize {
                expected: size,
                found: data.board.size(),
            });
        }
        if data.move_number == 0 {
            return Err(StateError::ZeroMove);
        }
        if data.history.len() != data.move_number as usize {
            return Err(StateError::HistoryLength {
                move_number: data.move_number,
                snapshots: data.history.len(),
            });
        }
        for (index, snapshot) in data.history.iter().enumerate() {
            if snapshot.size() != size {
                return Err(StateError::SnapshotSize {
                    index,
                    expected: size,
                    found: snapshot.size(),
                });
            }
            if !snapshot.is_settled() {
                return Err(StateError::UnsettledSnapshot { index });
            }
        }
        if let Some(p) = data.preview {
            if !data.board.contains(p.row, p.col) {
                return Err(StateError::PreviewOutOfRange {
                    row: p.row,
                    col: p.col,
                });
            }
        }

        Ok(Self {
            options: data.options,
            board: data.board,
            side: data.side,
            move_number: data.move_number,
            winner: data.winner,
            history: data.history,
            undos: data.undos,
            undo_applied: data.undo_applied,
            preview: data.preview,
        })
    }
}

impl Game {
    /// Start a game.
    ///
    /// # Panics
    ///
    /// Panics if `options` fail validation. Use `try_new` to handle that.
    #[must_use]
    pub fn new(options: Options) -> Self {
        match Self::try_new(options) {
            Ok(game) => game,
            Err(e) => panic!("invalid game options: {}", e),
        }
    }

    /// Start a game, rejecting invalid options.
    pub fn try_new(options: Options) -> Result<Self, ConfigError> {
        options.validate()?;

        let board = Board::new(options.size);
        Ok(Self {
            history: History::new(board.clone()),
            board,
            side: Side::Player1,
            move_number: 1,
            winner: Player::None,
            undos: SideMap::with_value(options.undos),
            undo_applied: false,
            preview: None,
            options,
        })
    }

    // === Read surface ===

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Working board, including any preview stone and rule markers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Settled boards, one per completed move; entry 0 is the empty board.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current move number (starts at 1).
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Side to move.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Side to move as a `Player` value.
    #[must_use]
    pub fn player(&self) -> Player {
        self.side.into()
    }

    #[must_use]
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Undos left for the side to move.
    #[must_use]
    pub fn undos(&self) -> UndoQuota {
        self.undos[self.side]
    }

    #[must_use]
    pub fn undos_of(&self, side: Side) -> UndoQuota {
        self.undos[side]
    }

    #[must_use]
    pub fn preview_target(&self) -> Option<Preview> {
        self.preview
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.winner.is_none() {
            Phase::Ended
        } else if self.is_seeding() {
            Phase::Seeding
        } else {
            Phase::Active
        }
    }

    #[must_use]
    pub fn is_seeding(&self) -> bool {
        self.move_number <= self.options.seeding_moves()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase() == Phase::Ended
    }

    /// Working board with the next generation's markers, for hint rendering.
    ///
    /// Outside the active phase this is just the working board.
    #[must_use]
    pub fn hints(&self) -> Board {
        match self.phase() {
            Phase::Active => preview_compute(&self.board, self.topology()),
            Phase::Seeding | Phase::Ended => self.board.clone(),
        }
    }

    pub(super) fn topology(&self) -> Topology {
        Topology::from_wrap(self.options.wrap_at_boundary)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
