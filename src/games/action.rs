//! Action codes and the errors raised when applying them.
//!
//! Every game consumes the same [`Action`] enum. The interaction adapter
//! maps whatever the user pressed or typed onto one of these codes, so the
//! engine never sees UI types.

use super::board::{Direction, OutOfBounds};
use super::players::Seat;
use super::rps::Hand;
use serde::{Deserialize, Serialize};

/// A single user intent, as delivered by the interaction adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put the actor's mark on a cell (tic-tac-toe).
    Place {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Walk the player one step (Sokoban).
    Move(Direction),
    /// Reload the current level (Sokoban).
    Restart,
    /// Go to the next level once it has been unlocked (Sokoban).
    NextLevel,
    /// Throw a hand (rock-paper-scissors).
    Choose(Hand),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { row, col } => write!(f, "place at ({}, {})", row, col),
            Action::Move(direction) => write!(f, "move {}", direction),
            Action::Restart => write!(f, "restart"),
            Action::NextLevel => write!(f, "next level"),
            Action::Choose(hand) => write!(f, "choose {}", hand),
        }
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Illegal {
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// A wall or an immovable box is in the way.
    #[display("the way is blocked")]
    Blocked,
    /// The game has already been decided.
    #[display("the game is already over")]
    GameOver,
    /// The next level has not been earned yet.
    #[display("the next level is still locked")]
    Locked,
    /// This seat has already made its choice.
    #[display("a choice was already made")]
    AlreadyChosen,
    /// The action does not belong to this game.
    #[display("this game does not understand that action")]
    Unsupported,
}

/// Error that can occur when applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside the board; the caller is misbehaving.
    #[display("{}", _0)]
    OutOfBounds(OutOfBounds),

    /// The actor does not hold the seat that may act.
    #[display("It's not your turn (waiting for {})", _0)]
    NotYourTurn(Seat),

    /// The action breaks the rules of the game.
    #[display("Illegal move: {}", _0)]
    IllegalMove(Illegal),
}

impl MoveError {
    /// Gameplay errors the adapter ignores silently.
    ///
    /// Only [`MoveError::OutOfBounds`] is a hard failure.
    pub fn is_expected(&self) -> bool {
        matches!(self, MoveError::NotYourTurn(_) | MoveError::IllegalMove(_))
    }
}

impl From<OutOfBounds> for MoveError {
    fn from(err: OutOfBounds) -> Self {
        MoveError::OutOfBounds(err)
    }
}

impl From<Illegal> for MoveError {
    fn from(reason: Illegal) -> Self {
        MoveError::IllegalMove(reason)
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_errors() {
        assert!(MoveError::NotYourTurn(Seat::First).is_expected());
        assert!(MoveError::IllegalMove(Illegal::Occupied).is_expected());
        let oob = OutOfBounds {
            row: 9,
            col: 0,
            rows: 3,
            cols: 3,
        };
        assert!(!MoveError::from(oob).is_expected());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::IllegalMove(Illegal::Blocked).to_string(),
            "Illegal move: the way is blocked"
        );
        assert_eq!(
            Action::Place { row: 1, col: 2 }.to_string(),
            "place at (1, 2)"
        );
    }
}
