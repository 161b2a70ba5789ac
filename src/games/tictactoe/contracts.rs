//! Contract-based validation for tic-tac-toe placements.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are always checked; postconditions only in debug builds.

use super::game::TicTacToe;
use super::types::{Move, Square};
use crate::games::action::{Illegal, MoveError};
use crate::games::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not been decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`Illegal::GameOver`] once a result is in.
    pub fn check(game: &TicTacToe) -> Result<(), MoveError> {
        if game.result.is_terminal() {
            Err(Illegal::GameOver.into())
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the mover's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::NotYourTurn`] for the waiting seat.
    pub fn check(mv: &Move, game: &TicTacToe) -> Result<(), MoveError> {
        if mv.seat != game.turn() {
            Err(MoveError::NotYourTurn(game.turn()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`Illegal::Occupied`], or `OutOfBounds` off the board.
    pub fn check(mv: &Move, game: &TicTacToe) -> Result<(), MoveError> {
        match game.board().get_at(mv.at)? {
            Square::Empty => Ok(()),
            Square::Occupied(_) => Err(Illegal::Occupied.into()),
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions: game not over, mover's turn, square empty.
/// Postconditions: exactly one new history entry, and every
/// [`TicTacToeInvariants`] member still holds.
pub struct PlacementContract;

impl Contract<TicTacToe, Move> for PlacementContract {
    #[instrument(skip(game), name = "placement_pre")]
    fn pre(game: &TicTacToe, mv: &Move) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(mv, game)?;
        SquareIsEmpty::check(mv, game)?;
        Ok(())
    }

    fn post(before: &TicTacToe, after: &TicTacToe) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TicTacToeInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new(
                "A placement appends exactly one history entry",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Panics in debug builds when a placement broke its postcondition.
pub fn assert_invariants(before: &TicTacToe, after: &TicTacToe) {
    if let Err(violations) = PlacementContract::post(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Placement postcondition failed");
        if cfg!(debug_assertions) {
            panic!("Postcondition failed: {}", descriptions);
        }
    }
}
