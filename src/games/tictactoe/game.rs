//! Tic-tac-toe engine shared by the 3×3 and 5×5 variants.

use super::contracts::{Contract, PlacementContract, assert_invariants};
use super::rules;
use super::types::{Mark, Move, Square, Variant};
use crate::games::action::{Action, Illegal, MoveError};
use crate::games::board::{Board, Coord};
use crate::games::phases::GameResult;
use crate::games::players::Seat;
use crate::games::rules::RuleSet;
use tracing::{debug, info, instrument};

/// One tic-tac-toe match.
///
/// States are `AwaitingMove(turn)` while [`GameResult::Pending`] and
/// `Decided(result)` afterwards. A rejected placement leaves every field
/// untouched.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    pub(crate) variant: Variant,
    pub(crate) board: Board<Square>,
    pub(crate) to_move: Seat,
    pub(crate) result: GameResult,
    pub(crate) history: Vec<Move>,
}

impl TicTacToe {
    /// Creates an empty board; seat 0 (X) moves first.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        let size = variant.size();
        Self {
            variant,
            board: Board::filled(size, size, Square::Empty),
            to_move: Seat::First,
            result: GameResult::Pending,
            history: Vec::new(),
        }
    }

    /// Board size and win condition.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The board.
    pub fn board(&self) -> &Board<Square> {
        &self.board
    }

    /// Turn cursor: the seat that places next.
    pub fn turn(&self) -> Seat {
        self.to_move
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places `seat`'s mark at `at`.
    ///
    /// # Errors
    ///
    /// `IllegalMove` when the game is decided or the square is taken,
    /// `NotYourTurn` when `seat` is not the turn-holder, and `OutOfBounds`
    /// when `at` is off the board.
    #[instrument(skip(self), fields(variant = self.variant.name()))]
    pub fn place(&mut self, at: Coord, seat: Seat) -> Result<GameResult, MoveError> {
        let mv = Move::new(seat, Mark::for_seat(seat), at);
        PlacementContract::pre(self, &mv)?;

        let before = cfg!(debug_assertions).then(|| self.clone());

        self.board.set_at(at, Square::Occupied(mv.mark))?;
        self.history.push(mv);
        self.to_move = seat.other();
        self.result = rules::evaluate(&self.board, self.variant);

        if let Some(before) = before {
            assert_invariants(&before, self);
        }

        debug!(%mv, result = %self.result, "Placement accepted");
        if self.result.is_terminal() {
            info!(result = %self.result, moves = self.history.len(), "Game decided");
        }
        Ok(self.result)
    }

    /// Replays placements from an empty board, alternating seats from seat 0.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(variant: Variant, moves: &[Coord]) -> Result<Self, MoveError> {
        let mut game = Self::new(variant);
        for at in moves {
            let seat = game.to_move;
            game.place(*at, seat)?;
        }
        Ok(game)
    }
}

impl RuleSet for TicTacToe {
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.board.rows(), self.board.cols())
    }

    fn to_move(&self) -> Option<Seat> {
        (!self.result.is_terminal()).then_some(self.to_move)
    }

    fn apply(&mut self, seat: Seat, action: Action) -> Result<GameResult, MoveError> {
        match action {
            Action::Place { row, col } => self.place(Coord::new(row, col), seat),
            _ => Err(Illegal::Unsupported.into()),
        }
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn render(&self) -> String {
        self.board.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = TicTacToe::new(Variant::Classic);
        assert_eq!(game.turn(), Seat::First);
        game.place(Coord::new(1, 1), Seat::First).unwrap();
        assert_eq!(game.turn(), Seat::Second);
        assert_eq!(game.board().get(1, 1), Ok(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = TicTacToe::replay(Variant::Classic, &[Coord::new(0, 0)]).unwrap();
        let snapshot = game.board().clone();

        assert_eq!(
            game.place(Coord::new(0, 0), Seat::Second),
            Err(MoveError::IllegalMove(Illegal::Occupied))
        );
        assert_eq!(
            game.place(Coord::new(2, 2), Seat::First),
            Err(MoveError::NotYourTurn(Seat::Second))
        );
        assert_eq!(game.board(), &snapshot);
        assert_eq!(game.turn(), Seat::Second);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_decided_game_rejects_moves() {
        let mut game = TicTacToe::replay(
            Variant::Classic,
            &[
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(0, 2),
            ],
        )
        .unwrap();
        assert_eq!(game.result(), GameResult::Win(Seat::First));
        assert_eq!(RuleSet::to_move(&game), None);

        let seat = game.turn();
        assert_eq!(
            game.place(Coord::new(2, 2), seat),
            Err(MoveError::IllegalMove(Illegal::GameOver))
        );
    }

    #[test]
    fn test_unsupported_action() {
        let mut game = TicTacToe::new(Variant::FourInARow);
        assert_eq!(
            game.apply(Seat::First, Action::Restart),
            Err(MoveError::IllegalMove(Illegal::Unsupported))
        );
    }

    #[test]
    fn test_render_classic() {
        let game = TicTacToe::replay(Variant::Classic, &[Coord::new(0, 0), Coord::new(2, 2)]).unwrap();
        assert_eq!(game.render(), "❌⬜⬜\n⬜⬜⬜\n⬜⬜⭕");
    }
}
