//! Move history.
//!
//! Every commit appends the settled board; an undo rolls back one full
//! round (the last move of each side). Snapshots are shared between game
//! values through `im`'s structural sharing.

mod snapshots;

pub use snapshots::History;
