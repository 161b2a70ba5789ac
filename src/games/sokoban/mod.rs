//! Sokoban: push every box onto a target, level by level.

mod game;
mod level;
mod tile;

pub use game::{Sokoban, VICTORY};
pub use level::{Level, LevelError, LevelRegistry};
pub use tile::Tile;
