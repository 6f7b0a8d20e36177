//! Terminal-state detection.

use crate::core::Board;

/// True iff the board is full and no two orthogonal neighbours are equal.
///
/// A terminal board cannot be changed by any move. Same check as
/// `Board::is_terminal`, as a free function for the move pipeline.
#[inline]
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}
