//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::games::board::Board;
use crate::games::tictactoe::{Square, TicTacToe};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must reproduce the
/// current board without ever writing to an occupied square.
pub struct MonotonicBoardInvariant;

impl Invariant<TicTacToe> for MonotonicBoardInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let size = game.variant().size();
        let mut reconstructed = Board::filled(size, size, Square::Empty);

        for mv in game.history() {
            if reconstructed.get_at(mv.at) != Ok(Square::Empty) {
                return false;
            }
            if reconstructed.set_at(mv.at, Square::Occupied(mv.mark)).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::board::Coord;
    use crate::games::tictactoe::{Mark, Variant};

    #[test]
    fn test_multiple_moves_hold() {
        let game = TicTacToe::replay(
            Variant::FourInARow,
            &[Coord::new(0, 0), Coord::new(4, 4), Coord::new(2, 3)],
        )
        .expect("legal replay");
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = TicTacToe::replay(Variant::Classic, &[Coord::new(1, 1)]).unwrap();
        game.board.set(1, 1, Square::Occupied(Mark::O)).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
