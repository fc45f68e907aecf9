//! Two-population Game of Life step.
//!
//! Every cell looks at its 8 Moore neighbors and counts those owned by each
//! side (Stable or Dying; Reviving cells are not owned yet).
//!
//! - Owned cell: survives with 2 or 3 occupied neighbors (either side),
//!   otherwise it is marked Dying.
//! - Empty cell: with exactly 3 occupied neighbors it is marked Reviving for
//!   the side contributing more of them. Equal counts go to Player2.
//!
//! `preview_compute` keeps the markers so a front end can show what a move
//! would do. `finalize_compute` settles them (`settle`) and is what a commit
//! writes to history.
//!
//! Because Dying still counts as owned and Reviving as empty, stepping a
//! previewed board gives the same next generation as stepping the raw board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, CellStatus, Side};

/// Moore neighborhood offsets, clockwise from north-west.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Edge handling for neighbor lookups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Cells past the edge read as empty.
    #[default]
    Bounded,
    /// Rows and columns wrap independently.
    Toroidal,
}

impl Topology {
    #[must_use]
    pub fn from_wrap(wrap_at_boundary: bool) -> Self {
        if wrap_at_boundary {
            Topology::Toroidal
        } else {
            Topology::Bounded
        }
    }

    /// In-grid neighbor coordinates of `(row, col)` on a `size × size` board.
    ///
    /// On a torus smaller than 3×3 the same cell can appear more than once
    /// (and may be the cell itself); each appearance counts.
    #[must_use]
    pub fn neighbors(self, size: usize, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        let mut out = SmallVec::new();
        if size == 0 {
            return out;
        }
        let n = size as isize;

        for (dr, dc) in OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            match self {
                Topology::Toroidal => {
                    out.push((r.rem_euclid(n) as usize, c.rem_euclid(n) as usize));
                }
                Topology::Bounded => {
                    if (0..n).contains(&r) && (0..n).contains(&c) {
                        out.push((r as usize, c as usize));
                    }
                }
            }
        }
        out
    }
}

/// Count neighbors of `(row, col)` whose status satisfies `predicate`.
#[must_use]
pub fn neighbor_count(
    board: &Board,
    row: usize,
    col: usize,
    topology: Topology,
    predicate: impl Fn(CellStatus) -> bool,
) -> u8 {
    topology
        .neighbors(board.size(), row, col)
        .into_iter()
        .filter(|&(r, c)| board.get(r, c).is_some_and(&predicate))
        .count() as u8
}

/// Next status of one cell given each side's neighbor count.
#[must_use]
pub fn next_status(current: CellStatus, player1_neighbors: u8, player2_neighbors: u8) -> CellStatus {
    let neighbors = u16::from(player1_neighbors) + u16::from(player2_neighbors);

    if let Some(owner) = current.owner() {
        if !(2..=3).contains(&neighbors) {
            return CellStatus::dying(owner);
        }
        return CellStatus::stable(owner);
    }

    if neighbors != 3 {
        return CellStatus::None;
    }

    // Ties cannot happen with an odd total, but they resolve to Player2.
    if player1_neighbors > player2_neighbors {
        CellStatus::reviving(Side::Player1)
    } else {
        CellStatus::reviving(Side::Player2)
    }
}

/// Collapse a computed status to its settled form.
#[must_use]
pub fn settle(status: CellStatus) -> CellStatus {
    match status {
        CellStatus::Player1Dying | CellStatus::Player2Dying => CellStatus::None,
        CellStatus::Player1Reviving => CellStatus::Player1,
        CellStatus::Player2Reviving => CellStatus::Player2,
        other => other,
    }
}

fn step(board: &Board, topology: Topology) -> Board {
    board.map(|row, col, status| {
        let p1 = neighbor_count(board, row, col, topology, |s| s.is_owned_by(Side::Player1));
        let p2 = neighbor_count(board, row, col, topology, |s| s.is_owned_by(Side::Player2));
        next_status(status, p1, p2)
    })
}

/// Apply the automaton to every cell, keeping Dying/Reviving markers.
#[must_use]
pub fn preview_compute(board: &Board, topology: Topology) -> Board {
    step(board, topology)
}

/// Apply the automaton to every cell and settle the result.
///
/// The output never contains Dying or Reviving cells.
#[must_use]
pub fn finalize_compute(board: &Board, topology: Topology) -> Board {
    step(board, topology).map(|_, _, status| settle(status))
}
