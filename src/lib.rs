//! # life-duel
//!
//! Rules engine for a two-player territorial Game of Life.
//!
//! Two players alternately place stones on a square grid. After a seeding
//! phase, every committed move steps the whole board through a Game of Life
//! update in which each player's stones are a competing population. A side
//! with no stones left loses; both sides wiped out is a draw.
//!
//! ## Design Principles
//!
//! 1. **Total API**: gameplay operations never fail or panic. A rejected
//!    request (occupied cell, undo not allowed, coordinates off the board)
//!    returns the state unchanged.
//!
//! 2. **Value Semantics**: operations take `&self` and return a new `Game`.
//!    History snapshots are shared via `im`, so copies stay cheap.
//!
//! 3. **Preview = Commit**: hovering and committing run the same placement
//!    and automaton path, so a preview shows exactly what a commit does.
//!
//! ## Modules
//!
//! - `core`: sides, cell statuses, boards, options, errors
//! - `rules`: automaton step (preview/finalize) and win detection
//! - `history`: settled snapshots and round rollback
//! - `game`: turn protocol, preview, commit, undo
//! - `python`: optional pyo3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod history;
pub mod game;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardDataError, BoardParseError, CellStatus, ConfigError, Options, Player, Side, SideMap,
    StateError, UndoQuota,
};

pub use crate::rules::{detect_winner, finalize_compute, preview_compute, Topology};

pub use crate::history::History;

pub use crate::game::{Game, Phase, Preview};
