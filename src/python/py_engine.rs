//! Engine bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, EngineConfig, BOARD_SIZE};
use crate::rules::{Engine, MoveOutcome};

fn direction(index: u8) -> PyResult<Direction> {
    Direction::from_index(index).ok_or_else(|| {
        PyValueError::new_err(format!(
            "direction must be 0 (up), 1 (down), 2 (left) or 3 (right), got {index}"
        ))
    })
}

/// Python wrapper for the engine.
///
/// Directions are integers: 0=up, 1=down, 2=left, 3=right.
#[pyclass(name = "MergeGrid")]
pub struct PyMergeGrid {
    engine: Engine,
}

#[pymethods]
impl PyMergeGrid {
    /// Create and initialize a game.
    ///
    /// # Arguments
    /// - seed: RNG seed; omit for an entropy-seeded game
    /// - four_probability: Chance that a spawned tile is a 4
    #[new]
    #[pyo3(signature = (seed = None, four_probability = 0.1))]
    fn new(seed: Option<u64>, four_probability: f64) -> PyResult<Self> {
        let config = EngineConfig {
            seed,
            four_probability,
        };
        let engine = Engine::new(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Start a new game on the same tile stream.
    fn initialize(&mut self) {
        self.engine.initialize();
    }

    /// Apply a move; True if the board changed.
    fn make_move(&mut self, direction_index: u8) -> PyResult<bool> {
        Ok(self.engine.make_move(direction(direction_index)?))
    }

    /// Apply a move and return the full outcome.
    fn step(&mut self, direction_index: u8) -> PyResult<PyMoveOutcome> {
        Ok(PyMoveOutcome(self.engine.step(direction(direction_index)?)))
    }

    /// Board copy as a 4x4 uint32 numpy array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let board = self.engine.board();
        PyArray1::from_slice_bound(py, board.cells()).reshape([BOARD_SIZE, BOARD_SIZE])
    }

    /// Directions that would change the board, as [up, down, left, right].
    fn legal_moves(&self) -> Vec<bool> {
        self.engine.legal_moves().to_vec()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.engine.score()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    #[getter]
    fn max_tile(&self) -> u32 {
        self.engine.board().max_tile()
    }

    fn __repr__(&self) -> String {
        format!(
            "MergeGrid(score={}, moves={}, over={})",
            self.engine.score(),
            self.engine.move_count(),
            self.engine.is_over()
        )
    }

    fn __str__(&self) -> String {
        self.engine.board().to_string()
    }
}

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    #[getter]
    fn changed(&self) -> bool {
        self.0.changed
    }

    #[getter]
    fn merges(&self) -> u32 {
        self.0.merges
    }

    #[getter]
    fn score_delta(&self) -> u64 {
        self.0.score_delta
    }

    /// Spawned tile as (row, col, value), or None.
    #[getter]
    fn spawned(&self) -> Option<(usize, usize, u32)> {
        self.0.spawned.map(|s| (s.row, s.col, s.value))
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.0.status.is_over()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(changed={}, merges={}, score_delta={})",
            self.0.changed, self.0.merges, self.0.score_delta
        )
    }
}
