//! Heterogeneous wrapper over every rule set.
//!
//! Sessions of different games live side by side in one
//! [`crate::SessionManager`], so they are stored as a single enum that
//! forwards [`RuleSet`] to the wrapped game.

use super::action::{Action, MoveError};
use super::phases::GameResult;
use super::players::{Seat, Seats};
use super::rps::RockPaperScissors;
use super::rules::RuleSet;
use super::sokoban::Sokoban;
use super::tictactoe::TicTacToe;
use derive_more::From;

/// Any playable game.
#[derive(Debug, Clone, From)]
pub enum AnyGame {
    /// 3×3 or 5×5 tic-tac-toe.
    TicTacToe(TicTacToe),
    /// Sokoban level run.
    Sokoban(Sokoban),
    /// Rock-paper-scissors round.
    RockPaperScissors(RockPaperScissors),
}

impl AnyGame {
    fn rules(&self) -> &dyn RuleSet {
        match self {
            AnyGame::TicTacToe(game) => game,
            AnyGame::Sokoban(game) => game,
            AnyGame::RockPaperScissors(game) => game,
        }
    }

    fn rules_mut(&mut self) -> &mut dyn RuleSet {
        match self {
            AnyGame::TicTacToe(game) => game,
            AnyGame::Sokoban(game) => game,
            AnyGame::RockPaperScissors(game) => game,
        }
    }
}

impl RuleSet for AnyGame {
    fn name(&self) -> &'static str {
        self.rules().name()
    }

    fn dimensions(&self) -> (usize, usize) {
        self.rules().dimensions()
    }

    fn to_move(&self) -> Option<Seat> {
        self.rules().to_move()
    }

    fn may_act(&self, seat: Seat) -> bool {
        self.rules().may_act(seat)
    }

    fn apply(&mut self, seat: Seat, action: Action) -> Result<GameResult, MoveError> {
        self.rules_mut().apply(seat, action)
    }

    fn result(&self) -> GameResult {
        self.rules().result()
    }

    fn render(&self) -> String {
        self.rules().render()
    }

    fn status(&self, seats: &Seats) -> String {
        self.rules().status(seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rps::Hand;
    use crate::games::tictactoe::Variant;

    #[test]
    fn test_forwards_to_wrapped_game() {
        let mut game = AnyGame::from(TicTacToe::new(Variant::FourInARow));
        assert_eq!(game.name(), "tictactoe5");
        assert_eq!(game.dimensions(), (5, 5));
        assert_eq!(
            game.apply(Seat::First, Action::Place { row: 4, col: 4 }),
            Ok(GameResult::Pending)
        );
        assert_eq!(game.to_move(), Some(Seat::Second));
    }

    #[test]
    fn test_forwards_overridden_may_act() {
        let game = AnyGame::from(RockPaperScissors::against_engine(Hand::Rock));
        assert!(game.may_act(Seat::First));
        assert!(!game.may_act(Seat::Second));
    }
}
