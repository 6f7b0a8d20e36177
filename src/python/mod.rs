//! Python bindings for the merge-grid engine.
//!
//! Exposes the engine to Python for agents and training loops.
//!
//! # Quick Start
//!
//! ```python
//! import merge_grid as mg
//!
//! game = mg.MergeGrid(seed=42)
//! while not game.is_over:
//!     moves = game.legal_moves()
//!     game.make_move(moves.index(True))
//!
//! print(game.score, game.board())
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// merge_grid: rule engine for a 4x4 sliding-tile merge puzzle.
#[pymodule]
fn merge_grid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMergeGrid>()?;
    m.add_class::<PyMoveOutcome>()?;
    Ok(())
}
