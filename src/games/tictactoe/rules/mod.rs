//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from the game state so
//! contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::types::{Square, Variant};
use crate::games::board::Board;
use crate::games::phases::GameResult;

/// Judges a board: a win beats a full board, otherwise the game goes on.
pub fn evaluate(board: &Board<Square>, variant: Variant) -> GameResult {
    if let Some(mark) = check_winner(board, variant.win_rule()) {
        GameResult::Win(mark.seat())
    } else if is_full(board) {
        GameResult::Tie
    } else {
        GameResult::Pending
    }
}
