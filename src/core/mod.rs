//! Core engine types: board, directions, status, RNG, configuration, errors.
//!
//! These are plain data types with invariant-preserving constructors.
//! The rules that move tiles around live in `rules`.

pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use board::{
    is_valid_tile, Axis, Board, Direction, Edge, EmptyCells, Line, BOARD_SIZE, CELL_COUNT, EMPTY,
    MAX_TILE_SUM,
};
pub use config::{EngineConfig, DEFAULT_FOUR_PROBABILITY};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use state::{EngineState, GameStatus};
