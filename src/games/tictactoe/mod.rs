//! Tic-tac-toe: the classic 3×3 game and the 5×5 four-in-a-row variant.

mod contracts;
mod game;
pub mod rules;
mod types;

pub use contracts::{Contract, GameNotOver, PlacementContract, PlayersTurn, SquareIsEmpty};
pub use game::TicTacToe;
pub use types::{Mark, Move, Square, Variant, WinRule};
