//! Game status and read-only engine snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::board::Board;

/// Whether the game still accepts moves.
///
/// `Over` is absorbing: once reached, moves are no-ops until the
/// engine is re-initialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    Over,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        self == GameStatus::Over
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => f.write_str("active"),
            GameStatus::Over => f.write_str("over"),
        }
    }
}

/// Snapshot of an engine, detached from its internal state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Copy of the grid.
    pub board: Board,
    /// Accumulated merge score.
    pub score: u64,
    /// Current status.
    pub status: GameStatus,
    /// Accepted moves since the last initialize.
    pub moves: u32,
}

impl EngineState {
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
