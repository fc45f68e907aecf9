//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Options, Player, Side, UndoQuota};
use crate::game::{Game, Phase};

fn side_from_py(player: u8) -> PyResult<Side> {
    match player {
        1 => Ok(Side::Player1),
        2 => Ok(Side::Player2),
        _ => Err(PyErr::new::<PyValueError, _>(format!(
            "player must be 1 or 2, got {}",
            player
        ))),
    }
}

fn player_to_py(player: Player) -> u8 {
    match player {
        Player::None => 0,
        Player::Player1 => 1,
        Player::Player2 => 2,
        Player::Draw => 3,
    }
}

fn quota_to_py(quota: UndoQuota) -> Option<u32> {
    match quota {
        UndoQuota::Finite(n) => Some(n),
        UndoQuota::Unlimited => None,
    }
}

fn codes(board: &Board) -> Vec<u8> {
    board.cells().iter().map(|s| s.code()).collect()
}

fn to_numpy<'py>(py: Python<'py>, board: &Board) -> PyResult<Bound<'py, PyArray2<u8>>> {
    let n = board.size();
    PyArray1::from_vec_bound(py, codes(board))
        .reshape([n, n])
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
}

/// Python wrapper for Game.
///
/// Immutable: every operation returns a new Game.
#[pyclass(name = "Game")]
#[derive(Clone)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Board side length (>= 1)
    /// - seeding_rounds: Rounds of free placement before the rules apply
    /// - undos: Undos per player, or None for unlimited
    /// - wrap_at_boundary: Wrap neighbor lookups around the edges
    /// - show_hints: Stored for the front end only
    #[new]
    #[pyo3(signature = (
        size = 9,
        seeding_rounds = 2,
        undos = Some(3),
        wrap_at_boundary = false,
        show_hints = false
    ))]
    fn new(
        size: usize,
        seeding_rounds: u32,
        undos: Option<u32>,
        wrap_at_boundary: bool,
        show_hints: bool,
    ) -> PyResult<Self> {
        let options = Options {
            size,
            seeding_rounds,
            undos: undos.map_or(UndoQuota::Unlimited, UndoQuota::Finite),
            wrap_at_boundary,
            show_hints,
        };
        Game::try_new(options)
            .map(Self)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    fn can_place(&self, row: usize, col: usize) -> bool {
        self.0.can_place(row, col)
    }

    /// Preview a stone for player 1 or 2.
    fn preview(&self, row: usize, col: usize, player: u8) -> PyResult<Self> {
        let side = side_from_py(player)?;
        Ok(Self(self.0.preview(row, col, side)))
    }

    fn cancel_preview(&self) -> Self {
        Self(self.0.cancel_preview())
    }

    fn commit(&self, row: usize, col: usize) -> Self {
        Self(self.0.commit(row, col))
    }

    fn can_undo(&self) -> bool {
        self.0.can_undo()
    }

    fn undo(&self) -> Self {
        Self(self.0.undo())
    }

    /// Working board as a `uint8[size, size]` array of cell codes.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        to_numpy(py, self.0.board())
    }

    /// Next-generation hint board as a `uint8[size, size]` array.
    fn hints_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        to_numpy(py, &self.0.hints())
    }

    /// Settled history as a `uint8[moves, size, size]` array, for playback.
    fn history_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let n = self.0.options().size;
        let history = self.0.history();
        let flat: Vec<u8> = history.iter().flat_map(codes).collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([history.len(), n, n])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.options().size
    }

    #[getter]
    fn show_hints(&self) -> bool {
        self.0.options().show_hints
    }

    #[getter]
    fn move_number(&self) -> u32 {
        self.0.move_number()
    }

    /// Player to move (1 or 2).
    #[getter]
    fn player(&self) -> u8 {
        player_to_py(self.0.player())
    }

    /// 0 = none yet, 1 / 2 = that player, 3 = draw.
    #[getter]
    fn winner(&self) -> u8 {
        player_to_py(self.0.winner())
    }

    /// Undos left for the player to move; None means unlimited.
    #[getter]
    fn undos(&self) -> Option<u32> {
        quota_to_py(self.0.undos())
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.0.phase() {
            Phase::Seeding => "seeding",
            Phase::Active => "active",
            Phase::Ended => "ended",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(move={}, player={}, winner={}, phase={})",
            self.0.move_number(),
            self.0.player(),
            self.0.winner(),
            self.phase()
        )
    }
}
