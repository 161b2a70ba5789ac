//! The capability every game variant provides to the engine.

use super::action::{Action, MoveError};
use super::phases::GameResult;
use super::players::{Seat, Seats};

/// Move legality, terminal detection and turn order for one game variant.
///
/// A rule set owns its board. [`crate::Session`] maps participants to
/// seats and forwards every seated actor's action to [`RuleSet::apply`],
/// so implementations reject out-of-turn seats and illegal actions
/// themselves and must leave their state untouched when they do.
pub trait RuleSet {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Board height and width.
    fn dimensions(&self) -> (usize, usize);

    /// Seat whose action is awaited, `None` once the game is decided.
    fn to_move(&self) -> Option<Seat>;

    /// Whether `seat` may act right now.
    fn may_act(&self, seat: Seat) -> bool {
        self.to_move() == Some(seat)
    }

    /// Applies `action` for `seat` and reports the resulting state.
    fn apply(&mut self, seat: Seat, action: Action) -> Result<GameResult, MoveError>;

    /// Current result.
    fn result(&self) -> GameResult;

    /// Plain-text rendering of the board (or a final banner).
    fn render(&self) -> String;

    /// One-line status for the participants.
    fn status(&self, seats: &Seats) -> String {
        match self.result() {
            GameResult::Pending => match self.to_move() {
                Some(seat) => format!("It is now `{}`'s turn", seats.get(seat).name()),
                None => String::new(),
            },
            GameResult::Win(seat) => format!("`{}` won!", seats.get(seat).name()),
            GameResult::Tie => "It's a tie!".to_string(),
        }
    }
}
