//! Sokoban cell vocabulary.

use crate::games::board::Glyph;

/// A Sokoban cell. The discriminants are the codes used in level files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::FromRepr,
    strum::Display,
)]
#[repr(u8)]
pub enum Tile {
    /// Open floor.
    Space = 0,
    /// Impassable.
    Wall = 1,
    /// The player (possibly standing on a target).
    Player = 2,
    /// An uncovered storage location.
    Target = 3,
    /// A box on open floor.
    Box = 4,
    /// A box resting on a target.
    BoxOnTarget = 5,
}

impl Tile {
    /// Level-file code of this tile.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the tile holds a box.
    pub fn is_box(self) -> bool {
        matches!(self, Tile::Box | Tile::BoxOnTarget)
    }
}

impl Glyph for Tile {
    fn glyph(self) -> &'static str {
        match self {
            Tile::Space => "⬛",
            Tile::Wall => "🟫",
            Tile::Player => "😳",
            Tile::Target => "🟥",
            Tile::Box => "❎",
            Tile::BoxOnTarget => "☑",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip() {
        for tile in Tile::iter() {
            assert_eq!(Tile::from_repr(tile.code()), Some(tile));
        }
        assert_eq!(Tile::from_repr(6), None);
    }
}
