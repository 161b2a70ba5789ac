//! Read-only catalogue of Sokoban levels.
//!
//! Levels are loaded once at process start from a JSON asset and shared by
//! every session behind an `Arc`. Corrupt level data is a hard failure.

use super::tile::Tile;
use crate::games::board::{Board, Coord};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Level asset compiled into the binary.
const BUILTIN_LEVELS: &str = include_str!("../../../assets/sokoban.json");

/// Level data could not be loaded.
#[derive(Debug, Display, Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[display("Failed to read level file {}: {}", path.display(), source)]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid level JSON.
    #[display("Malformed level data: {}", _0)]
    Parse(serde_json::Error),
    /// The file holds no levels.
    #[display("Level file contains no levels")]
    Empty,
    /// A level board is empty or its rows differ in length.
    #[display("Level {level}: board rows are empty or of unequal length")]
    Ragged {
        /// Zero-based level index.
        level: usize,
    },
    /// A cell holds a code outside the tile vocabulary.
    #[display("Level {level}: unknown tile code {code} at ({row}, {col})")]
    UnknownTile {
        /// Zero-based level index.
        level: usize,
        /// Offending code.
        code: u8,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },
    /// The board does not hold exactly one player at the declared start.
    #[display("Level {level}: expected one player tile at ({}, {}), found {found}", start.row, start.col)]
    PlayerStart {
        /// Zero-based level index.
        level: usize,
        /// Declared start position.
        start: Coord,
        /// Number of player tiles on the board.
        found: usize,
    },
    /// A target lies off the board or under a tile that cannot cover it.
    #[display("Level {level}: target ({}, {}) is off the board or covered by a wall", target.row, target.col)]
    BadTarget {
        /// Zero-based level index.
        level: usize,
        /// Offending target.
        target: Coord,
    },
    /// A target-like tile sits where no target is registered.
    #[display("Level {level}: target tile at ({}, {}) is not a registered target", at.row, at.col)]
    StrayTarget {
        /// Zero-based level index.
        level: usize,
        /// Offending cell.
        at: Coord,
    },
}

/// On-disk shape of one level.
#[derive(Debug, Deserialize)]
struct RawLevel {
    board: Vec<Vec<u8>>,
    #[serde(rename = "playerPos")]
    player_pos: [usize; 2],
    #[serde(rename = "targetsPos")]
    targets_pos: Vec<[usize; 2]>,
}

/// One validated level.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Level {
    /// Initial layout, player included.
    board: Board<Tile>,
    /// Where the player starts.
    player_start: Coord,
    /// Storage locations; fixed for the lifetime of the level.
    targets: BTreeSet<Coord>,
}

impl Level {
    /// Number of boxes on the initial board.
    pub fn box_count(&self) -> usize {
        self.board.count(Tile::Box) + self.board.count(Tile::BoxOnTarget)
    }

    fn from_raw(level: usize, raw: RawLevel) -> Result<Self, LevelError> {
        let rows = raw.board.len();
        let cols = raw.board.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 || raw.board.iter().any(|r| r.len() != cols) {
            return Err(LevelError::Ragged { level });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in raw.board.iter().enumerate() {
            for (col, code) in line.iter().enumerate() {
                let tile = Tile::from_repr(*code).ok_or(LevelError::UnknownTile {
                    level,
                    code: *code,
                    row,
                    col,
                })?;
                cells.push(tile);
            }
        }
        let board = Board::from_cells(rows, cols, cells).ok_or(LevelError::Ragged { level })?;

        let start = Coord::new(raw.player_pos[0], raw.player_pos[1]);
        let found = board.count(Tile::Player);
        if found != 1 || board.get_at(start) != Ok(Tile::Player) {
            return Err(LevelError::PlayerStart { level, start, found });
        }

        let targets: BTreeSet<Coord> = raw
            .targets_pos
            .iter()
            .map(|[row, col]| Coord::new(*row, *col))
            .collect();
        for target in &targets {
            match board.get_at(*target) {
                Ok(Tile::Target | Tile::BoxOnTarget | Tile::Player) => {}
                _ => {
                    return Err(LevelError::BadTarget {
                        level,
                        target: *target,
                    });
                }
            }
        }
        for kind in [Tile::Target, Tile::BoxOnTarget] {
            if let Some(at) = board.positions(kind).find(|at| !targets.contains(at)) {
                return Err(LevelError::StrayTarget { level, at });
            }
        }

        Ok(Self {
            board,
            player_start: start,
            targets,
        })
    }
}

/// Ordered, read-only list of levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRegistry {
    levels: Vec<Level>,
}

impl LevelRegistry {
    /// Parses and validates a JSON level array.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let raw: Vec<RawLevel> = serde_json::from_str(json).map_err(LevelError::Parse)?;
        if raw.is_empty() {
            return Err(LevelError::Empty);
        }
        let levels = raw
            .into_iter()
            .enumerate()
            .map(|(index, level)| Level::from_raw(index, level))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = levels.len(), "Parsed level registry");
        Ok(Self { levels })
    }

    /// Loads levels from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        info!(count = registry.len(), "Loaded level registry");
        Ok(registry)
    }

    /// The levels shipped with the crate.
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_json_str(BUILTIN_LEVELS)
    }

    /// Level at `index`, if any.
    pub fn get_level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a loaded registry.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates the levels in order.
    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_LEVEL: &str = r#"[{
        "board": [[1,1,1,1,1],[1,2,4,3,1],[1,1,1,1,1]],
        "playerPos": [1, 1],
        "targetsPos": [[1, 3]]
    }]"#;

    #[test]
    fn test_builtin_levels_load() {
        let registry = LevelRegistry::builtin().expect("builtin levels are valid");
        assert!(!registry.is_empty());
        for level in registry.iter() {
            assert_eq!(level.box_count(), level.targets().len());
        }
    }

    #[test]
    fn test_parse_single_level() {
        let registry = LevelRegistry::from_json_str(ONE_LEVEL).unwrap();
        let level = registry.get_level(0).unwrap();
        assert_eq!(*level.player_start(), Coord::new(1, 1));
        assert!(level.targets().contains(&Coord::new(1, 3)));
        assert_eq!(level.board().cols(), 5);
        assert!(registry.get_level(1).is_none());
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(
            LevelRegistry::from_json_str("[]"),
            Err(LevelError::Empty)
        ));
    }

    #[test]
    fn test_ragged_board_rejected() {
        let json = r#"[{"board": [[1,1,1],[1,2]], "playerPos": [1,1], "targetsPos": []}]"#;
        assert!(matches!(
            LevelRegistry::from_json_str(json),
            Err(LevelError::Ragged { level: 0 })
        ));
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let json = r#"[{"board": [[1,9],[2,0]], "playerPos": [1,0], "targetsPos": []}]"#;
        assert!(matches!(
            LevelRegistry::from_json_str(json),
            Err(LevelError::UnknownTile { code: 9, row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_misplaced_player_rejected() {
        let json = r#"[{"board": [[1,1,1],[1,2,0]], "playerPos": [1,2], "targetsPos": []}]"#;
        assert!(matches!(
            LevelRegistry::from_json_str(json),
            Err(LevelError::PlayerStart { found: 1, .. })
        ));
    }

    #[test]
    fn test_target_under_wall_rejected() {
        let json = r#"[{"board": [[1,1,1],[1,2,0]], "playerPos": [1,1], "targetsPos": [[0,0]]}]"#;
        assert!(matches!(
            LevelRegistry::from_json_str(json),
            Err(LevelError::BadTarget { .. })
        ));
    }

    #[test]
    fn test_unregistered_target_tile_rejected() {
        let json = r#"[{"board": [[1,3,1],[1,2,0]], "playerPos": [1,1], "targetsPos": []}]"#;
        assert!(matches!(
            LevelRegistry::from_json_str(json),
            Err(LevelError::StrayTarget { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LevelRegistry::from_json_str("{not json"),
            Err(LevelError::Parse(_))
        ));
    }
}
