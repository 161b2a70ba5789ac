//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::games::tictactoe::{Square, TicTacToe};

/// Invariant: history length equals the number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<TicTacToe> for HistoryConsistentInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::board::Coord;
    use crate::games::tictactoe::{Mark, Variant};

    #[test]
    fn test_single_move_holds() {
        let game = TicTacToe::replay(Variant::Classic, &[Coord::new(2, 1)]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut game = TicTacToe::new(Variant::Classic);
        game.board.set(0, 0, Square::Occupied(Mark::X)).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
