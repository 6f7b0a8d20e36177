//! Board-level move: compress, merge, compress on every line.

use crate::core::{Board, Direction, BOARD_SIZE};

use super::line::{compress_line, merge_line};

/// What a shift did to the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftResult {
    /// True if any line changed at any step.
    pub changed: bool,
    /// Tile pairs merged across all lines.
    pub merges: u32,
    /// Sum of merged tile values.
    pub score: u64,
}

/// Slide and merge every line of `board` toward `direction`.
///
/// Does not spawn. When `changed` is false the board is untouched.
pub fn shift_board(board: &mut Board, direction: Direction) -> ShiftResult {
    let axis = direction.axis();
    let edge = direction.edge();
    let mut result = ShiftResult::default();

    for index in 0..BOARD_SIZE {
        let mut line = board.line(axis, index);

        let compressed = compress_line(&mut line, edge);
        let merge = merge_line(&mut line, edge);
        let closed = compress_line(&mut line, edge);

        if compressed || merge.merged() || closed {
            board.set_line(axis, index, &line);
            result.changed = true;
        }
        result.merges += merge.merges;
        result.score += merge.score;
    }

    result
}
