//! Engine error type.
//!
//! Gameplay itself never fails: moves on a finished game are no-ops and
//! spawning on a full board does nothing. Errors only arise when a caller
//! hands the engine data that breaks a board or configuration invariant.

use thiserror::Error;

/// Invariant violations detected at the engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A cell value that is neither empty nor a power of two >= 2.
    #[error("invalid tile {value} at ({row}, {col}): tiles must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Tiles that add up past `MAX_TILE_SUM`.
    #[error("tile sum {sum} exceeds the board limit of 2^31")]
    TileSumTooLarge { sum: u64 },

    /// Cell coordinates outside the grid.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
