//! The game engine: owns the board, score, and status.
//!
//! ## Lifecycle
//!
//! - `initialize`: empty board, two spawns, status `Active`
//! - `step` / `make_move`: shift the board; if it changed, spawn one tile
//!   and check for a terminal board
//! - Once `Over`, every move is a no-op until `initialize` runs again
//!
//! The engine is single-threaded and synchronous. Callers sharing one
//! engine across threads must serialize access themselves.

use crate::core::{
    Board, Direction, EngineConfig, EngineError, EngineState, GameRng, GameStatus,
};

use super::shift::shift_board;
use super::spawn::{RandomTiles, Spawn, TileSource, TileSpawner};
use super::terminal::is_terminal;

/// Tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

/// Result of one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True if the board changed; only then was a tile spawned.
    pub changed: bool,
    /// Tile pairs merged.
    pub merges: u32,
    /// Score gained by this move.
    pub score_delta: u64,
    /// Tile placed after the move, if any.
    pub spawned: Option<Spawn>,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            changed: false,
            merges: 0,
            score_delta: 0,
            spawned: None,
            status,
        }
    }
}

/// Sliding-tile merge engine.
///
/// ```
/// use merge_grid::{Direction, Engine};
///
/// let mut engine = Engine::seeded(42);
/// assert_eq!(engine.board().tile_count(), 2);
/// assert_eq!(engine.score(), 0);
///
/// let changed = engine.make_move(Direction::Left);
/// if changed {
///     assert!(engine.board().tile_count() >= 2);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Engine<S = RandomTiles> {
    board: Board,
    score: u64,
    status: GameStatus,
    moves: u32,
    spawner: TileSpawner<S>,
}

impl Engine<RandomTiles> {
    /// Create and initialize an engine from configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        tracing::debug!(seed = rng.seed(), "creating engine");
        Ok(Self::with_source(RandomTiles::with_four_probability(
            rng,
            config.four_probability,
        )))
    }

    /// Create and initialize an engine with a fixed seed and default odds.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RandomTiles::new(GameRng::new(seed)))
    }
}

impl<S: TileSource> Engine<S> {
    /// Create and initialize an engine drawing spawns from `source`.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        let mut engine = Self {
            board: Board::new(),
            score: 0,
            status: GameStatus::Active,
            moves: 0,
            spawner: TileSpawner::new(source),
        };
        engine.initialize();
        engine
    }

    /// Resume play from an existing position.
    ///
    /// No tiles are spawned. The status is `Over` if the board is already
    /// terminal.
    #[must_use]
    pub fn from_board(board: Board, score: u64, source: S) -> Self {
        let status = if is_terminal(&board) {
            GameStatus::Over
        } else {
            GameStatus::Active
        };
        Self {
            board,
            score,
            status,
            moves: 0,
            spawner: TileSpawner::new(source),
        }
    }

    /// Reset to an empty board, place the two starting tiles, and reopen play.
    pub fn initialize(&mut self) -> EngineState {
        self.board.clear();
        self.score = 0;
        self.moves = 0;

        for _ in 0..INITIAL_TILES {
            self.spawner.spawn(&mut self.board);
        }

        self.status = if is_terminal(&self.board) {
            GameStatus::Over
        } else {
            GameStatus::Active
        };
        tracing::debug!(tiles = self.board.tile_count(), "initialized board");
        self.state()
    }

    /// Apply a move and report everything it did.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        if self.status.is_over() {
            return MoveOutcome::unchanged(self.status);
        }

        let shift = shift_board(&mut self.board, direction);
        if !shift.changed {
            return MoveOutcome::unchanged(self.status);
        }

        self.score += shift.score;
        self.moves = self.moves.saturating_add(1);
        let spawned = self.spawner.spawn(&mut self.board);

        if is_terminal(&self.board) {
            self.status = GameStatus::Over;
            tracing::info!(
                score = self.score,
                moves = self.moves,
                max_tile = self.board.max_tile(),
                "game over"
            );
        }

        tracing::debug!(
            %direction,
            merges = shift.merges,
            score_delta = shift.score,
            score = self.score,
            "move applied"
        );

        MoveOutcome {
            changed: true,
            merges: shift.merges,
            score_delta: shift.score,
            spawned,
            status: self.status,
        }
    }

    /// Apply a move; true if the board changed.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        self.step(direction).changed
    }

    /// Which directions would change the board, indexed like `Direction::ALL`.
    ///
    /// All false once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> [bool; 4] {
        if self.status.is_over() {
            return [false; 4];
        }
        Direction::ALL.map(|direction| {
            let mut trial = self.board;
            shift_board(&mut trial, direction).changed
        })
    }

    /// Copy of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Accepted moves since the last initialize.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Snapshot of board, score, status and move count.
    #[must_use]
    pub fn state(&self) -> EngineState {
        EngineState {
            board: self.board,
            score: self.score,
            status: self.status,
            moves: self.moves,
        }
    }

    /// The spawn decision source.
    #[must_use]
    pub fn source(&self) -> &S {
        self.spawner.source()
    }
}
