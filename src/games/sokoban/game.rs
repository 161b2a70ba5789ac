//! Single-player Sokoban over a shared level registry.

use super::level::{Level, LevelError, LevelRegistry};
use super::tile::Tile;
use crate::games::action::{Action, Illegal, MoveError};
use crate::games::board::{Board, Coord, Direction};
use crate::games::invariants::{InvariantSet, SokobanInvariants};
use crate::games::phases::GameResult;
use crate::games::players::{Seat, Seats};
use crate::games::rules::RuleSet;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Banner shown once every level is cleared.
pub const VICTORY: &str = "VICTORY";

/// One player's run through the level registry.
///
/// The player always occupies seat 0. Target positions come from the
/// registry and never move; a cell the player or a box leaves reverts to
/// `Target` when it is one, `Space` otherwise.
#[derive(Debug, Clone)]
pub struct Sokoban {
    registry: Arc<LevelRegistry>,
    pub(crate) level: usize,
    pub(crate) board: Board<Tile>,
    pub(crate) player: Coord,
    targets: BTreeSet<Coord>,
    boxes: usize,
    unlocked: bool,
    result: GameResult,
}

impl Sokoban {
    /// Starts at the first level of `registry`.
    #[instrument(skip(registry), fields(levels = registry.len()))]
    pub fn new(registry: Arc<LevelRegistry>) -> Result<Self, LevelError> {
        let first = registry.get_level(0).ok_or(LevelError::Empty)?.clone();
        let mut game = Self {
            registry,
            level: 0,
            board: first.board().clone(),
            player: *first.player_start(),
            targets: BTreeSet::new(),
            boxes: 0,
            unlocked: false,
            result: GameResult::Pending,
        };
        game.load(&first);
        Ok(game)
    }

    fn load(&mut self, level: &Level) {
        self.board = level.board().clone();
        self.player = *level.player_start();
        self.targets = level.targets().clone();
        self.boxes = level.box_count();
        self.unlocked = self.is_level_complete();
        debug!(level = self.level, unlocked = self.unlocked, "Level loaded");
    }

    /// Zero-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.level
    }

    /// Number of levels in the registry.
    pub fn level_count(&self) -> usize {
        self.registry.len()
    }

    /// Current board.
    pub fn board(&self) -> &Board<Tile> {
        &self.board
    }

    /// Player position.
    pub fn player(&self) -> Coord {
        self.player
    }

    /// Storage locations of the current level.
    pub fn targets(&self) -> &BTreeSet<Coord> {
        &self.targets
    }

    /// Boxes the current level started with.
    pub fn box_count(&self) -> usize {
        self.boxes
    }

    /// Whether the next level may be entered.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Whether every target is covered and as many boxes as possible sit on one.
    ///
    /// The player may cover a target only when there are fewer boxes than
    /// targets, so standing on an empty target never completes a level.
    pub fn is_level_complete(&self) -> bool {
        let covered = self.targets.iter().all(|target| {
            matches!(
                self.board.get_at(*target),
                Ok(Tile::BoxOnTarget | Tile::Player)
            )
        });
        covered && self.board.count(Tile::BoxOnTarget) == self.boxes.min(self.targets.len())
    }

    /// Walks the player one step, pushing at most one box orthogonally.
    ///
    /// Returns `false` and leaves the board untouched when the move is
    /// blocked or the run is over.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.result.is_terminal() {
            return false;
        }
        let moved = match direction.components() {
            None => self.push(direction),
            Some((vertical, horizontal)) => self.slip(direction, vertical, horizontal),
        };
        if moved {
            debug!(player = %self.player, "Player moved");
            self.check_invariants();
            if !self.unlocked && self.is_level_complete() {
                info!(level = self.level, "Level complete");
                self.unlocked = true;
            }
        }
        moved
    }

    fn push(&mut self, direction: Direction) -> bool {
        let Some((dest, tile)) = self.board.neighbor(self.player, direction) else {
            return false;
        };
        match tile {
            Tile::Space | Tile::Target => self.walk_to(dest),
            Tile::Box | Tile::BoxOnTarget => {
                let pushed = match self.board.neighbor(dest, direction) {
                    Some((beyond, Tile::Space)) => (beyond, Tile::Box),
                    Some((beyond, Tile::Target)) => (beyond, Tile::BoxOnTarget),
                    _ => return false,
                };
                self.board.set_at(pushed.0, pushed.1).is_ok() && self.walk_to(dest)
            }
            Tile::Wall | Tile::Player => false,
        }
    }

    fn slip(&mut self, direction: Direction, vertical: Direction, horizontal: Direction) -> bool {
        let Some((dest, Tile::Space)) = self.board.neighbor(self.player, direction) else {
            return false;
        };
        let open = |side: Direction| {
            matches!(self.board.neighbor(self.player, side), Some((_, Tile::Space)))
        };
        if !open(vertical) && !open(horizontal) {
            return false;
        }
        self.walk_to(dest)
    }

    fn walk_to(&mut self, dest: Coord) -> bool {
        let vacated = if self.targets.contains(&self.player) {
            Tile::Target
        } else {
            Tile::Space
        };
        if self.board.set_at(self.player, vacated).is_err()
            || self.board.set_at(dest, Tile::Player).is_err()
        {
            return false;
        }
        self.player = dest;
        true
    }

    /// Reloads the current level from the registry.
    ///
    /// An unlock already earned on this level is kept.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn restart_level(&mut self) -> bool {
        if self.result.is_terminal() {
            return false;
        }
        let earned = self.unlocked;
        match self.registry.get_level(self.level).cloned() {
            Some(level) => {
                self.load(&level);
                self.unlocked |= earned;
                true
            }
            None => false,
        }
    }

    /// Moves on once the current level is unlocked.
    ///
    /// From the final level this decides the run as a win instead.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn advance_level(&mut self) -> bool {
        if self.result.is_terminal() || !self.unlocked {
            return false;
        }
        let next = self.level + 1;
        match self.registry.get_level(next).cloned() {
            Some(level) => {
                self.level = next;
                self.load(&level);
            }
            None => {
                info!(levels = self.registry.len(), "Every level cleared");
                self.result = GameResult::Win(Seat::First);
                self.unlocked = false;
            }
        }
        true
    }

    fn check_invariants(&self) {
        if let Err(violations) = SokobanInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Sokoban invariant broken");
            if cfg!(debug_assertions) {
                panic!("Invariant failed: {}", descriptions);
            }
        }
    }
}

impl RuleSet for Sokoban {
    fn name(&self) -> &'static str {
        "sokoban"
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.board.rows(), self.board.cols())
    }

    fn to_move(&self) -> Option<Seat> {
        (!self.result.is_terminal()).then_some(Seat::First)
    }

    fn apply(&mut self, seat: Seat, action: Action) -> Result<GameResult, MoveError> {
        if self.result.is_terminal() {
            return Err(Illegal::GameOver.into());
        }
        if seat != Seat::First {
            return Err(MoveError::NotYourTurn(Seat::First));
        }
        let accepted = match action {
            Action::Move(direction) => self.move_player(direction).then_some(()).ok_or(Illegal::Blocked),
            Action::Restart => self.restart_level().then_some(()).ok_or(Illegal::GameOver),
            Action::NextLevel => self.advance_level().then_some(()).ok_or(Illegal::Locked),
            Action::Place { .. } | Action::Choose(_) => Err(Illegal::Unsupported),
        };
        accepted?;
        Ok(self.result)
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn render(&self) -> String {
        if self.result.is_terminal() {
            VICTORY.to_string()
        } else {
            self.board.render()
        }
    }

    fn status(&self, seats: &Seats) -> String {
        let player = seats.get(Seat::First).name();
        if self.result.is_terminal() {
            return format!("`{}` cleared every level!", player);
        }
        let progress = format!("Level {}/{}", self.level + 1, self.registry.len());
        if self.unlocked {
            format!("{} complete! Press ⏩ to continue", progress)
        } else {
            progress
        }
    }
}
