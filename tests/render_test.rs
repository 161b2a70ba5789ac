//! Rendering is a pure function of board state.

use chezzi_games::{Board, Glyph, Square, Tile};
use std::collections::HashSet;
use strum::IntoEnumIterator;

#[test]
fn test_every_tile_has_a_distinct_glyph() {
    let glyphs: HashSet<_> = Tile::iter().map(Tile::glyph).collect();
    assert_eq!(glyphs.len(), Tile::iter().count());
}

#[test]
fn test_every_square_has_a_distinct_glyph() {
    let glyphs: HashSet<_> = Square::ALL.iter().map(|s| s.glyph()).collect();
    assert_eq!(glyphs.len(), Square::ALL.len());
}

#[test]
fn test_render_round_trips_through_glyphs() {
    let tiles: Vec<Tile> = Tile::iter().collect();
    let board = Board::from_cells(2, 3, tiles.clone()).unwrap();
    let rendered = board.render();
    assert_eq!(rendered, board.clone().render());

    let lookup: Vec<(&str, Tile)> = Tile::iter().map(|t| (t.glyph(), t)).collect();
    let mut decoded = Vec::new();
    for line in rendered.lines() {
        let mut rest = line;
        while !rest.is_empty() {
            let (glyph, tile) = lookup
                .iter()
                .find(|(g, _)| rest.starts_with(g))
                .expect("known glyph");
            decoded.push(*tile);
            rest = &rest[glyph.len()..];
        }
    }
    assert_eq!(decoded, tiles);
}
