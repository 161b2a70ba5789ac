//! Draw detection logic for tic-tac-toe.

use super::super::types::{Square, WinRule};
use super::win::check_winner;
use crate::games::board::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board<Square>) -> bool {
    board.cells().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board<Square>, rule: WinRule) -> bool {
    is_full(board) && check_winner(board, rule).is_none()
}
