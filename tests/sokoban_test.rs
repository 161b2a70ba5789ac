//! Sokoban rules and level loading.

use chezzi_games::{
    Action, Direction, GameResult, Illegal, LevelError, LevelRegistry, MoveError, RuleSet, Seat,
    Sokoban, Tile,
};
use std::io::Write;
use std::sync::Arc;

/// `# P $ . #` with open floor above and below.
const PUSH_LANE: &str = r#"[
    {
        "board": [
            [1, 1, 1, 1, 1, 1, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 2, 4, 3, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 1, 1, 1, 1, 1, 1]
        ],
        "playerPos": [2, 1],
        "targetsPos": [[2, 3]]
    },
    {
        "board": [[1, 1, 1, 1], [1, 2, 0, 1], [1, 1, 1, 1]],
        "playerPos": [1, 1],
        "targetsPos": []
    }
]"#;

fn lane() -> Sokoban {
    let registry = LevelRegistry::from_json_str(PUSH_LANE).expect("valid levels");
    Sokoban::new(Arc::new(registry)).expect("registry has levels")
}

#[test]
fn test_push_off_target_and_back_again() {
    let mut game = lane();
    assert!(game.move_player(Direction::Right));
    assert_eq!(game.board().get(2, 3), Ok(Tile::BoxOnTarget));
    assert!(game.is_unlocked());

    // Push the box past the target, then walk round and push it back.
    assert!(game.move_player(Direction::Right));
    assert_eq!(game.board().get(2, 4), Ok(Tile::Box));
    assert_eq!(game.board().get(2, 3), Ok(Tile::Player));
    for direction in [Direction::Up, Direction::Right, Direction::Right, Direction::Down] {
        assert!(game.move_player(direction), "{direction} should be open");
    }
    assert_eq!(game.board().get(2, 3), Ok(Tile::Target));
    assert!(game.move_player(Direction::Left));
    assert_eq!(game.board().get(2, 3), Ok(Tile::BoxOnTarget));
    assert_eq!(game.board().count(Tile::BoxOnTarget), 1);
    assert_eq!(game.board().count(Tile::Box), 0);
}

#[test]
fn test_rejected_move_leaves_board_untouched() {
    let mut game = lane();
    let before = game.board().clone();
    assert_eq!(
        game.apply(Seat::First, Action::Move(Direction::Left)),
        Err(MoveError::IllegalMove(Illegal::Blocked))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.result(), GameResult::Pending);
}

#[test]
fn test_full_run_ends_in_victory() {
    let mut game = lane();
    game.apply(Seat::First, Action::Move(Direction::Right)).unwrap();
    game.apply(Seat::First, Action::NextLevel).unwrap();
    assert_eq!(game.level_index(), 1);

    // The last level has no targets, so it is complete as soon as it loads.
    assert!(game.is_unlocked());
    game.apply(Seat::First, Action::Move(Direction::Right)).unwrap();
    assert_eq!(
        game.apply(Seat::First, Action::NextLevel),
        Ok(GameResult::Win(Seat::First))
    );
    assert_eq!(game.render(), "VICTORY");
    assert!(!game.move_player(Direction::Left));
    assert!(!game.restart_level());
}

#[test]
fn test_levels_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PUSH_LANE.as_bytes()).unwrap();
    let registry = LevelRegistry::from_file(file.path()).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_missing_level_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LevelRegistry::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LevelError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_builtin_levels_are_all_solvable_shapes() {
    let registry = LevelRegistry::builtin().unwrap();
    assert_eq!(registry.len(), 3);
    for level in registry.iter() {
        assert_eq!(level.box_count(), level.targets().len());
        assert_eq!(level.board().count(Tile::Player), 1);
    }
}
