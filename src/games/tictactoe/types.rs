//! Core domain types for tic-tac-toe.

use crate::games::board::{Coord, Glyph};
use crate::games::players::Seat;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Played from seat 0, moves first.
    X,
    /// Played from seat 1.
    O,
}

impl Mark {
    /// Mark used by the participant in `seat`.
    pub fn for_seat(seat: Seat) -> Self {
        match seat {
            Seat::First => Mark::X,
            Seat::Second => Mark::O,
        }
    }

    /// Seat that plays this mark.
    pub fn seat(self) -> Seat {
        match self {
            Mark::X => Seat::First,
            Mark::O => Seat::Second,
        }
    }

    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Signed value used by the line-sum win rule.
    pub fn value(self) -> i32 {
        match self {
            Mark::X => -1,
            Mark::O => 1,
        }
    }
}

/// A square on a tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Every square value a board may hold.
    pub const ALL: [Square; 3] = [Square::Empty, Square::Occupied(Mark::X), Square::Occupied(Mark::O)];

    /// Signed value of the square (0 when empty).
    pub fn value(self) -> i32 {
        match self {
            Square::Empty => 0,
            Square::Occupied(mark) => mark.value(),
        }
    }
}

impl Glyph for Square {
    fn glyph(self) -> &'static str {
        match self {
            Square::Empty => "⬜",
            Square::Occupied(Mark::X) => "❌",
            Square::Occupied(Mark::O) => "⭕",
        }
    }
}

/// How a line is judged to be winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinRule {
    /// A contiguous run of this many identical marks in any direction.
    Run(usize),
    /// Full rows or columns whose mark values sum to at least this many in
    /// magnitude, or diagonal windows of this length holding one mark only.
    LineSum(usize),
}

/// Board size and win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 3×3, three in a row.
    Classic,
    /// 5×5, four in a line.
    FourInARow,
}

impl Variant {
    /// Side length of the square board.
    pub fn size(self) -> usize {
        match self {
            Variant::Classic => 3,
            Variant::FourInARow => 5,
        }
    }

    /// Number of marks that make a win.
    pub fn win_len(self) -> usize {
        match self {
            Variant::Classic => 3,
            Variant::FourInARow => 4,
        }
    }

    /// Win rule for this variant.
    pub fn win_rule(self) -> WinRule {
        match self {
            Variant::Classic => WinRule::Run(self.win_len()),
            Variant::FourInARow => WinRule::LineSum(self.win_len()),
        }
    }

    /// Name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "tictactoe",
            Variant::FourInARow => "tictactoe5",
        }
    }
}

/// A mark placed by a seat, recorded in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Seat that moved.
    pub seat: Seat,
    /// Mark written.
    pub mark: Mark,
    /// Cell written.
    pub at: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.at)
    }
}
