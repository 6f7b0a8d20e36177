//! # merge-grid
//!
//! Rule engine for a 4x4 sliding-tile merge puzzle.
//!
//! ## Design Principles
//!
//! 1. **Deterministic core**: every rule is a pure function of the board.
//!    The only randomness is tile spawning, injected through `TileSource`.
//!
//! 2. **One move algorithm**: each direction maps to an (axis, edge) pair and
//!    runs the same compress, merge, compress sequence.
//!
//! 3. **Snapshots out, moves in**: callers read copies of the board and
//!    change it only by submitting moves.
//!
//! ## Modules
//!
//! - `core`: Board, directions, status, RNG, configuration, errors
//! - `rules`: Line compress/merge, board shift, spawning, terminal detection, engine
//!
//! ## Example
//!
//! ```
//! use merge_grid::{Direction, Engine, EngineConfig};
//!
//! let mut engine = Engine::new(&EngineConfig::default().with_seed(7)).unwrap();
//! for direction in Direction::ALL.iter().cycle().take(40) {
//!     if engine.is_over() {
//!         break;
//!     }
//!     engine.make_move(*direction);
//! }
//! println!("score {}\n{}", engine.score(), engine.board());
//! ```

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Axis, Board, Direction, Edge, EngineConfig, EngineError, EngineState, GameRng, GameRngState,
    GameStatus, Line, BOARD_SIZE, CELL_COUNT, EMPTY, MAX_TILE_SUM,
};

pub use crate::rules::{
    compress_line, is_terminal, merge_line, shift_board, Engine, LineMerge, MoveOutcome,
    RandomTiles, ScriptedTiles, ShiftResult, Spawn, TileSource, TileSpawner,
};
