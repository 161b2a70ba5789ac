//! Alternating turn invariant: seats alternate 0, 1, 0, 1, ...

use super::Invariant;
use crate::games::players::Seat;
use crate::games::tictactoe::{Mark, TicTacToe};

/// Invariant: seats alternate and each seat writes its own mark.
///
/// Seat 0 always moves first, and the turn cursor points at the seat that
/// did not make the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<TicTacToe> for AlternatingTurnInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let history = game.history();

        if history.iter().any(|mv| mv.mark != Mark::for_seat(mv.seat)) {
            return false;
        }

        if history.first().is_some_and(|first| first.seat != Seat::First) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].seat == pair[1].seat) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };
        game.turn() == expected_next
    }

    fn description() -> &'static str {
        "Seats alternate turns (0, 1, 0, 1, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::board::Coord;
    use crate::games::tictactoe::Variant;

    #[test]
    fn test_empty_game_holds() {
        let game = TicTacToe::new(Variant::Classic);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = TicTacToe::replay(
            Variant::Classic,
            &[
                Coord::new(0, 0),
                Coord::new(1, 1),
                Coord::new(0, 2),
                Coord::new(2, 0),
                Coord::new(2, 2),
            ],
        )
        .expect("legal replay");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Seat::Second);
    }

    #[test]
    fn test_stale_turn_cursor_violates() {
        let mut game = TicTacToe::replay(Variant::Classic, &[Coord::new(1, 1)]).unwrap();
        game.to_move = Seat::First;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
