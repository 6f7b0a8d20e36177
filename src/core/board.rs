//! The 4x4 grid, lines, and move directions.
//!
//! ## Board
//!
//! Flat row-major array of cell values: `row * BOARD_SIZE + col`.
//! `0` is an empty cell, any other value is a power of two >= 2. The tile
//! values of a board sum to at most `MAX_TILE_SUM`: a merged tile is never
//! larger than that sum, so doubling stays within `u32`.
//!
//! ## Lines
//!
//! A line is one row or one column copied out as `[u32; BOARD_SIZE]`,
//! indexed from the left (rows) or top (columns). Moves read a line,
//! compress and merge it toward an `Edge`, then write it back.
//!
//! Only the move and spawn steps in `rules` can mutate a board; the
//! public API hands out copies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::error::EngineError;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Value of an empty cell.
pub const EMPTY: u32 = 0;

/// Upper bound on the sum of all tiles accepted from callers.
///
/// Each spawn adds at most 4, so play would need over 2^29 moves past this
/// bound before a merge could leave `u32`.
pub const MAX_TILE_SUM: u64 = 1 << 31;

/// One row or column, indexed left-to-right or top-to-bottom.
pub type Line = [u32; BOARD_SIZE];

/// Indices of empty cells. Never spills to the heap on a 4x4 grid.
pub type EmptyCells = SmallVec<[usize; CELL_COUNT]>;

/// Whether `value` may appear on a board.
#[inline]
#[must_use]
pub fn is_valid_tile(value: u32) -> bool {
    value == EMPTY || (value >= 2 && value.is_power_of_two())
}

/// Which kind of line a move operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal moves operate on rows.
    Row,
    /// Vertical moves operate on columns.
    Column,
}

/// The end of a line tiles are pushed toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Index 0: the left of a row, the top of a column.
    Leading,
    /// Index `BOARD_SIZE - 1`: the right of a row, the bottom of a column.
    Trailing,
}

impl Edge {
    /// Line positions ordered from this edge toward the opposite one.
    ///
    /// ```
    /// use merge_grid::core::Edge;
    ///
    /// assert_eq!(Edge::Leading.scan_order(), [0, 1, 2, 3]);
    /// assert_eq!(Edge::Trailing.scan_order(), [3, 2, 1, 0]);
    /// ```
    #[must_use]
    pub fn scan_order(self) -> [usize; BOARD_SIZE] {
        std::array::from_fn(|i| match self {
            Edge::Leading => i,
            Edge::Trailing => BOARD_SIZE - 1 - i,
        })
    }
}

/// Move direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Decode an integer direction (0=Up, 1=Down, 2=Left, 3=Right).
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Position of this direction in `Direction::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The kind of line this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Up | Direction::Down => Axis::Column,
        }
    }

    /// The edge tiles travel toward.
    #[must_use]
    pub const fn edge(self) -> Edge {
        match self {
            Direction::Left | Direction::Up => Edge::Leading,
            Direction::Right | Direction::Down => Edge::Trailing,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// The game grid.
///
/// Deserialization goes through the same checks as `Board::from_cells`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: [u32; CELL_COUNT],
}

/// Wire form of a board before validation.
#[derive(Deserialize)]
struct RawBoard {
    cells: [u32; CELL_COUNT],
}

impl TryFrom<RawBoard> for Board {
    type Error = EngineError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.cells)
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [EMPTY; CELL_COUNT],
        }
    }

    /// Build a board from rows, rejecting values that are not tiles.
    ///
    /// ```
    /// use merge_grid::core::Board;
    ///
    /// let board = Board::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 8],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.tile_count(), 3);
    ///
    /// assert!(Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, EngineError> {
        Self::from_cells(std::array::from_fn(|idx| {
            rows[idx / BOARD_SIZE][idx % BOARD_SIZE]
        }))
    }

    /// Build a board from row-major cells.
    ///
    /// Fails on any value that is not a tile, or if the tiles sum to more
    /// than `MAX_TILE_SUM`.
    pub fn from_cells(cells: [u32; CELL_COUNT]) -> Result<Self, EngineError> {
        let mut board = Self::new();
        for (idx, &value) in cells.iter().enumerate() {
            board.set(idx / BOARD_SIZE, idx % BOARD_SIZE, value)?;
        }

        let sum = board.tile_sum();
        if sum > MAX_TILE_SUM {
            return Err(EngineError::TileSumTooLarge { sum });
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Cell value at (row, col), `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set a cell, validating bounds and value.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), EngineError> {
        let idx = Self::index(row, col).ok_or(EngineError::OutOfBounds { row, col })?;
        if !is_valid_tile(value) {
            return Err(EngineError::InvalidTile { row, col, value });
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Set a cell by flat index. Callers guarantee the index and value are valid.
    pub(crate) fn set_flat(&mut self, idx: usize, value: u32) {
        debug_assert!(is_valid_tile(value), "invalid tile {value}");
        self.cells[idx] = value;
    }

    /// Copy out row or column `index`.
    #[must_use]
    pub fn line(&self, axis: Axis, index: usize) -> Line {
        std::array::from_fn(|i| match axis {
            Axis::Row => self.cells[index * BOARD_SIZE + i],
            Axis::Column => self.cells[i * BOARD_SIZE + index],
        })
    }

    /// Write back row or column `index`.
    pub(crate) fn set_line(&mut self, axis: Axis, index: usize, line: &Line) {
        for (i, &value) in line.iter().enumerate() {
            let idx = match axis {
                Axis::Row => index * BOARD_SIZE + i,
                Axis::Column => i * BOARD_SIZE + index,
            };
            self.cells[idx] = value;
        }
    }

    /// Empty every cell.
    pub(crate) fn clear(&mut self) {
        self.cells = [EMPTY; CELL_COUNT];
    }

    /// Flat indices of all empty cells, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == EMPTY)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != EMPTY).count()
    }

    /// Largest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != EMPTY)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// True iff the board is full and no two orthogonal neighbours are equal.
    ///
    /// A terminal board cannot be changed by any move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        if !self.is_full() {
            return false;
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row * BOARD_SIZE + col];
                if col + 1 < BOARD_SIZE && value == self.cells[row * BOARD_SIZE + col + 1] {
                    return false;
                }
                if row + 1 < BOARD_SIZE && value == self.cells[(row + 1) * BOARD_SIZE + col] {
                    return false;
                }
            }
        }

        true
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// The grid as rows.
    #[must_use]
    pub fn rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        std::array::from_fn(|row| self.line(Axis::Row, row))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if *value == EMPTY {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{value:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 3), Some(3));
        assert_eq!(Board::index(1, 0), Some(4));
        assert_eq!(Board::index(3, 3), Some(15));
        assert_eq!(Board::index(4, 0), None);
        assert_eq!(Board::index(0, 4), None);
    }

    #[test]
    fn test_valid_tiles() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(4));
        assert!(is_valid_tile(2048));
        assert!(is_valid_tile(1 << 31));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(3));
        assert!(!is_valid_tile(6));
    }

    #[test]
    fn test_from_rows_rejects_invalid_tile() {
        let err = Board::from_rows([[0, 0, 0, 0], [0, 0, 12, 0], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, EngineError::InvalidTile { row: 1, col: 2, value: 12 });
    }

    #[test]
    fn test_from_rows_rejects_tile_sum_past_cap() {
        let err = Board::from_rows([[1 << 31, 1 << 31, 0, 0], [0; 4], [0; 4], [0; 4]])
            .unwrap_err();
        assert_eq!(err, EngineError::TileSumTooLarge { sum: 1 << 32 });

        let err = Board::from_rows([[1 << 30; 4], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, EngineError::TileSumTooLarge { sum: 1 << 32 });

        let at_cap = Board::from_rows([[1 << 30, 1 << 30, 0, 0], [0; 4], [0; 4], [0; 4]])
            .unwrap();
        assert_eq!(at_cap.tile_sum(), MAX_TILE_SUM);
    }

    #[test]
    fn test_deserialize_validates_cells() {
        let mut cells = [0u32; CELL_COUNT];
        cells[0] = 3;
        cells[1] = 3;
        let json = serde_json::json!({ "cells": cells }).to_string();
        let err = serde_json::from_str::<Board>(&json).unwrap_err();
        assert!(err.to_string().contains("invalid tile 3 at (0, 0)"), "{err}");

        cells = [0; CELL_COUNT];
        cells[5] = 1 << 31;
        cells[6] = 1 << 31;
        let json = serde_json::json!({ "cells": cells }).to_string();
        assert!(serde_json::from_str::<Board>(&json).is_err());
    }

    #[test]
    fn test_serde_keeps_valid_board() {
        let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0, 0, 1024, 0], [0, 0, 0, 8]]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with(r#"{"cells":[2,4,0,0,"#));
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_is_terminal_on_board() {
        let checkerboard = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        assert!(checkerboard.is_terminal());
        assert!(!Board::new().is_terminal());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.set(4, 1, 2),
            Err(EngineError::OutOfBounds { row: 4, col: 1 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_line_roundtrip_rows_and_columns() {
        let mut board = Board::from_rows([
            [2, 4, 8, 16],
            [0, 2, 0, 0],
            [0, 0, 4, 0],
            [0, 0, 0, 8],
        ])
        .unwrap();

        assert_eq!(board.line(Axis::Row, 0), [2, 4, 8, 16]);
        assert_eq!(board.line(Axis::Column, 1), [4, 2, 0, 0]);
        assert_eq!(board.line(Axis::Column, 3), [16, 0, 0, 8]);

        board.set_line(Axis::Column, 0, &[0, 0, 0, 2]);
        assert_eq!(board.get(0, 0), Some(0));
        assert_eq!(board.get(3, 0), Some(2));
        assert_eq!(board.line(Axis::Row, 0), [0, 4, 8, 16]);
    }

    #[test]
    fn test_empty_cells_and_counts() {
        let board = Board::from_rows([
            [2, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 64, 0],
            [0, 0, 0, 4],
        ])
        .unwrap();

        let empty = board.empty_cells();
        assert_eq!(empty.len(), 13);
        assert!(!empty.spilled());
        assert!(!empty.contains(&0));
        assert!(!empty.contains(&10));
        assert!(!empty.contains(&15));

        assert_eq!(board.tile_count(), 3);
        assert_eq!(board.max_tile(), 64);
        assert!(!board.is_full());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_rows([[2; 4], [4; 4], [8; 4], [16; 4]]).unwrap();
        assert!(board.is_full());
        board.clear();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_direction_mapping() {
        assert_eq!(Direction::Left.axis(), Axis::Row);
        assert_eq!(Direction::Right.axis(), Axis::Row);
        assert_eq!(Direction::Up.axis(), Axis::Column);
        assert_eq!(Direction::Down.axis(), Axis::Column);

        assert_eq!(Direction::Left.edge(), Edge::Leading);
        assert_eq!(Direction::Up.edge(), Edge::Leading);
        assert_eq!(Direction::Right.edge(), Edge::Trailing);
        assert_eq!(Direction::Down.edge(), Edge::Trailing);
    }

    #[test]
    fn test_direction_index_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_index(dir.index() as u8), Some(dir));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 1024]]).unwrap();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].trim_start().starts_with('2'));
        assert!(lines[3].ends_with("1024"));
    }
}
