//! Sokoban board invariants.

use super::Invariant;
use crate::games::sokoban::{Sokoban, Tile};

/// Invariant: exactly one player tile, at the tracked player position.
pub struct SinglePlayerInvariant;

impl Invariant<Sokoban> for SinglePlayerInvariant {
    fn holds(game: &Sokoban) -> bool {
        game.board().count(Tile::Player) == 1 && game.board().get_at(game.player()) == Ok(Tile::Player)
    }

    fn description() -> &'static str {
        "Exactly one player tile, at the player position"
    }
}

/// Invariant: moves never create or destroy boxes.
pub struct BoxesConservedInvariant;

impl Invariant<Sokoban> for BoxesConservedInvariant {
    fn holds(game: &Sokoban) -> bool {
        let board = game.board();
        board.count(Tile::Box) + board.count(Tile::BoxOnTarget) == game.box_count()
    }

    fn description() -> &'static str {
        "Box count matches the level"
    }
}

/// Invariant: target tiles appear exactly at registered targets.
///
/// A registered target holds `Target`, `BoxOnTarget` or the player; any
/// other cell never shows a target tile.
pub struct TargetsIntactInvariant;

impl Invariant<Sokoban> for TargetsIntactInvariant {
    fn holds(game: &Sokoban) -> bool {
        let board = game.board();
        let registered = game.targets().iter().all(|target| {
            matches!(
                board.get_at(*target),
                Ok(Tile::Target | Tile::BoxOnTarget | Tile::Player)
            )
        });
        let stray = [Tile::Target, Tile::BoxOnTarget]
            .into_iter()
            .flat_map(|tile| board.positions(tile))
            .any(|at| !game.targets().contains(&at));
        registered && !stray
    }

    fn description() -> &'static str {
        "Target tiles only at registered targets"
    }
}
