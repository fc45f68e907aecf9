//! Core types: sides, cell statuses, boards, configuration, errors.
//!
//! Everything here is plain data. The rules live in `rules`, the turn
//! protocol in `game`.

pub mod player;
pub mod cell;
pub mod board;
pub mod config;
pub mod error;

pub use player::{Player, Side, SideMap};
pub use cell::CellStatus;
pub use board::Board;
pub use config::{Options, UndoQuota, SIZE_RANGE, SEEDING_ROUNDS_RANGE, UNDO_SETTING_RANGE};
pub use error::{BoardDataError, BoardParseError, ConfigError, StateError};
