//! Rules: the automaton step and win detection.
//!
//! Pure functions over `Board`. The turn protocol in `game` decides when
//! they run:
//! - `preview_compute` while a placement is being previewed
//! - `finalize_compute` + `detect_winner` when a move is committed
//!
//! Nothing here is called during the seeding phase.

pub mod automaton;
pub mod outcome;

pub use automaton::{finalize_compute, neighbor_count, next_status, preview_compute, settle, Topology};
pub use outcome::detect_winner;
