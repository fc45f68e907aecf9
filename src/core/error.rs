//! Error types for the fallible edges of the engine.
//!
//! Gameplay operations never fail: rejected requests return the state
//! unchanged. Only configuration, text-board parsing and loading
//! serialized state report errors.

use thiserror::Error;

/// Invalid game configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroSize,
}

/// Malformed text board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell glyph {glyph:?} at ({row}, {col})")]
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

/// Board data that does not describe a `size × size` grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardDataError {
    #[error("board size must be at least 1")]
    ZeroSize,

    #[error("board of size {size} needs {expected} cells, found {found}")]
    CellCount {
        size: usize,
        expected: usize,
        found: usize,
    },
}

/// Serialized game state that no sequence of operations could produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error(transparent)]
    Options(#[from] ConfigError),

    #[error("board size {found} does not match configured size {expected}")]
    BoardSize { expected: usize, found: usize },

    #[error("move number must start at 1")]
    ZeroMove,

    #[error("history has {snapshots} snapshots at move {move_number}")]
    HistoryLength { move_number: u32, snapshots: usize },

    #[error("history snapshot {index} has size {found}, expected {expected}")]
    SnapshotSize {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("history snapshot {index} holds Dying/Reviving cells")]
    UnsettledSnapshot { index: usize },

    #[error("preview target ({row}, {col}) is off the board")]
    PreviewOutOfRange { row: usize, col: usize },
}
