//! Tile spawning.
//!
//! ## TileSource
//!
//! The only randomness in the engine. A source picks which empty cell
//! receives the new tile and what value it gets. Production games use
//! `RandomTiles`; tests script exact outcomes with `ScriptedTiles`.
//!
//! ## TileSpawner
//!
//! Lists the empty cells of a board in row-major order, asks the source
//! for an index into that list and a value, and writes the tile.

use std::collections::VecDeque;

use crate::core::{Board, GameRng, BOARD_SIZE, DEFAULT_FOUR_PROBABILITY};

/// Provider of spawn decisions.
pub trait TileSource {
    /// Index into the row-major list of empty cells.
    ///
    /// Must be less than `empty_count`, which is always at least 1.
    fn next_empty_cell_index(&mut self, empty_count: usize) -> usize;

    /// Value of the new tile: 2 or 4.
    fn next_tile_value(&mut self) -> u32;
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn next_empty_cell_index(&mut self, empty_count: usize) -> usize {
        (**self).next_empty_cell_index(empty_count)
    }

    fn next_tile_value(&mut self) -> u32 {
        (**self).next_tile_value()
    }
}

impl<T: TileSource + ?Sized> TileSource for Box<T> {
    fn next_empty_cell_index(&mut self, empty_count: usize) -> usize {
        (**self).next_empty_cell_index(empty_count)
    }

    fn next_tile_value(&mut self) -> u32 {
        (**self).next_tile_value()
    }
}

/// Uniform cell choice, 2 with probability `1 - four_probability`, else 4.
#[derive(Clone, Debug)]
pub struct RandomTiles {
    rng: GameRng,
    four_probability: f64,
}

impl RandomTiles {
    /// Standard 90/10 split over the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_four_probability(rng, DEFAULT_FOUR_PROBABILITY)
    }

    /// Custom probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(rng: GameRng, four_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&four_probability),
            "four_probability must be within [0, 1]"
        );
        Self {
            rng,
            four_probability,
        }
    }

    /// The underlying RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

impl TileSource for RandomTiles {
    fn next_empty_cell_index(&mut self, empty_count: usize) -> usize {
        self.rng.gen_range_usize(0..empty_count)
    }

    fn next_tile_value(&mut self) -> u32 {
        if self.rng.gen_bool(self.four_probability) {
            4
        } else {
            2
        }
    }
}

/// Replays fixed spawn decisions.
///
/// Once a queue runs dry it falls back to the first empty cell and a 2.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTiles {
    cells: VecDeque<usize>,
    values: VecDeque<u32>,
}

impl ScriptedTiles {
    #[must_use]
    pub fn new(
        cells: impl IntoIterator<Item = usize>,
        values: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            values: values.into_iter().collect(),
        }
    }

    /// Always the first empty cell, always a 2.
    #[must_use]
    pub fn first_cell_twos() -> Self {
        Self::default()
    }

    /// Decisions not yet consumed, as (cells, values).
    #[must_use]
    pub fn remaining(&self) -> (usize, usize) {
        (self.cells.len(), self.values.len())
    }
}

impl TileSource for ScriptedTiles {
    fn next_empty_cell_index(&mut self, _empty_count: usize) -> usize {
        self.cells.pop_front().unwrap_or(0)
    }

    fn next_tile_value(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(2)
    }
}

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Places new tiles using a `TileSource`.
#[derive(Clone, Debug)]
pub struct TileSpawner<S> {
    source: S,
}

impl<S: TileSource> TileSpawner<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The decision source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the decision source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Place one tile in a random empty cell.
    ///
    /// Returns `None` without touching the board if it is full.
    ///
    /// # Panics
    ///
    /// If the source breaks its contract: an index outside the empty-cell
    /// list or a value other than 2 or 4.
    pub fn spawn(&mut self, board: &mut Board) -> Option<Spawn> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            tracing::warn!("spawn requested on a full board");
            return None;
        }

        let pick = self.source.next_empty_cell_index(empty.len());
        assert!(
            pick < empty.len(),
            "tile source returned cell index {pick} for {} empty cells",
            empty.len()
        );
        let value = self.source.next_tile_value();
        assert!(
            value == 2 || value == 4,
            "tile source returned value {value}, expected 2 or 4"
        );

        let idx = empty[pick];
        board.set_flat(idx, value);

        let spawn = Spawn {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
            value,
        };
        tracing::trace!(row = spawn.row, col = spawn.col, value, "spawned tile");
        Some(spawn)
    }
}
