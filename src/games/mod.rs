//! Game implementations and the pieces they share.

pub mod action;
pub mod any_game;
pub mod board;
pub mod invariants;
pub mod phases;
pub mod players;
pub mod rps;
pub mod rules;
pub mod sokoban;
pub mod tictactoe;
