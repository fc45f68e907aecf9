//! Python bindings for the life-duel rules engine.
//!
//! Lets a Python front end drive a game and read boards as numpy arrays.
//!
//! # Quick Start
//!
//! ```python
//! import life_duel
//!
//! game = life_duel.Game(size=9, seeding_rounds=2, undos=3)
//! game = game.preview(4, 4, 1)   # hover
//! game = game.commit(4, 4)       # click
//! cells = game.board_numpy()     # uint8[9, 9] cell codes
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// life_duel: two-player territorial Game of Life.
#[pymodule]
fn life_duel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
