//! Square board of cell statuses.
//!
//! Stored row-major in a flat `Vec`. Reads outside the grid return `None`
//! instead of panicking, so callers never have to bounds-check first.
//!
//! ## Text format
//!
//! One line per row, one glyph per cell (see `CellStatus::glyph`):
//!
//! ```
//! use life_duel::core::{Board, CellStatus};
//!
//! let board = Board::from_rows(&["X..", ".O.", "..."]).unwrap();
//! assert_eq!(board.get(1, 1), Some(CellStatus::Player2));
//! assert_eq!(board.to_string(), "X..\n.O.\n...");
//! ```

use serde::{Deserialize, Serialize};

use super::cell::CellStatus;
use super::error::{BoardDataError, BoardParseError};
use super::player::Side;

/// A `size × size` grid of cells.
///
/// Deserializing checks that `cells` holds exactly `size²` entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<CellStatus>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<CellStatus>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardDataError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.size == 0 {
            return Err(BoardDataError::ZeroSize);
        }
        if raw.size.checked_mul(raw.size) != Some(raw.cells.len()) {
            return Err(BoardDataError::CellCount {
                size: raw.size,
                expected: raw.size.saturating_mul(raw.size),
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellStatus::None; size * size],
        }
    }

    /// Parse a board from text rows.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                return Err(BoardParseError::RaggedRow {
                    row,
                    expected: size,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let status = CellStatus::from_glyph(glyph)
                    .ok_or(BoardParseError::UnknownGlyph { row, col, glyph })?;
                cells.push(status);
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get a cell. Returns `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<CellStatus> {
        if self.contains(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Set a cell. Returns false (and changes nothing) outside the grid.
    pub fn set(&mut self, row: usize, col: usize, status: CellStatus) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells[row * self.size + col] = status;
        true
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellStatus] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellStatus]> {
        // chunks(0) panics; an empty board simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate over `(row, col, status)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellStatus)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &status)| (i / size, i % size, status))
    }

    /// Build a board of the same size by mapping every cell.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(usize, usize, CellStatus) -> CellStatus) -> Self {
        let cells = self.iter().map(|(r, c, s)| f(r, c, s)).collect();
        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of cells owned by a side (Stable or Dying).
    #[must_use]
    pub fn count_owned(&self, side: Side) -> usize {
        self.cells.iter().filter(|s| s.is_owned_by(side)).count()
    }

    /// True when no cell carries a Dying/Reviving marker.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.cells.iter().any(|s| s.is_transient())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for status in row {
                write!(f, "{}", status.glyph())?;
            }
        }
        Ok(())
    }
}
