//! Result of a match.

use super::players::Seat;
use serde::{Deserialize, Serialize};

/// Where a match stands.
///
/// `Pending` until a rule set decides the game; `Win` and `Tie` are
/// terminal and no further moves are accepted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves are still being accepted.
    Pending,
    /// The participant in this seat won.
    Win(Seat),
    /// Nobody won.
    Tie,
}

impl GameResult {
    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::Pending)
    }

    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            GameResult::Win(seat) => Some(*seat),
            GameResult::Pending | GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Pending => write!(f, "Pending"),
            GameResult::Win(seat) => write!(f, "Won by {}", seat),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}
