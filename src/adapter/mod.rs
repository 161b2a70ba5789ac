//! Line-oriented terminal adapter.
//!
//! Drives one session held in a [`SessionManager`]: reads a command per
//! line, forwards actions to the engine and prints the refreshed board.
//! Rejected moves are ignored without comment. The idle timer restarts
//! with every prompt.

mod input;

pub use input::{Command, Input, ParseError, parse_command, parse_line};

use crate::games::action::Action;
use crate::games::phases::GameResult;
use crate::games::players::Participant;
use crate::games::rules::RuleSet;
use crate::session::{SessionError, SessionManager};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, instrument, warn};

/// Shown when a game expires without input.
pub const TIMED_OUT: &str = "⏰ Timed Out";

/// Shown when a player abandons the game.
pub const STOPPED: &str = "⛔ Stopped";

/// How a terminal game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The rule set decided the game.
    Decided(GameResult),
    /// A player typed `stop`.
    Stopped,
    /// No input arrived within the idle timeout.
    TimedOut,
    /// Input closed before the game ended.
    Closed,
}

/// Control summary for a game, printed before the first board.
pub fn controls(game: &str) -> &'static str {
    match game {
        "sokoban" => {
            "Move: w a s d, diagonals q e z c • 🔄 r Restart • ⏩ n Next Level • ⛔ x Stop"
        }
        "rps" => "Choose: rock, paper or scissors • ⛔ x Stop",
        _ => "Place: `<row> <col>` or `b2`, counting from 1 • ⛔ x Stop",
    }
}

/// Runs the session on `channel` until it ends.
///
/// Finished, stopped and timed-out sessions are removed from `manager`.
#[instrument(skip(manager, input, output))]
pub async fn run<R, W>(
    manager: &mut SessionManager,
    channel: &str,
    idle_timeout: Duration,
    input: R,
    output: &mut W,
) -> std::io::Result<Finish>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(session) = manager.get(channel) else {
        warn!(channel, "No session to run");
        return Ok(Finish::Closed);
    };
    writeln!(output, "{}", controls(session.rules().name()))?;
    writeln!(output, "{}", session.render_current_state())?;

    let mut lines = input.lines();
    loop {
        let Some(session) = manager.get(channel) else {
            return Ok(Finish::Closed);
        };
        if session.is_terminal() {
            let result = session.rules().result();
            manager.discard(channel);
            info!(channel, %result, "Game finished");
            return Ok(Finish::Decided(result));
        }

        let line = match tokio::time::timeout(idle_timeout, lines.next_line()).await {
            Err(_) => {
                info!(channel, ?idle_timeout, "Game timed out");
                manager.discard(channel);
                writeln!(output, "{}", TIMED_OUT)?;
                return Ok(Finish::TimedOut);
            }
            Ok(Ok(Some(line))) => line,
            Ok(Ok(None)) => {
                debug!(channel, "Input closed");
                return Ok(Finish::Closed);
            }
            Ok(Err(e)) => return Err(e),
        };

        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let action = match parsed.command {
            Command::Stop => {
                manager.discard(channel);
                writeln!(output, "{}", STOPPED)?;
                return Ok(Finish::Stopped);
            }
            Command::Act(action) => action,
        };

        let actor = match &parsed.actor {
            Some(name) => session.seats().by_name(name).cloned(),
            None => session.current_actor().cloned(),
        };
        let Some(actor) = actor else {
            if let Some(name) = parsed.actor {
                writeln!(output, "`{}` is not playing in this game", name)?;
            }
            continue;
        };

        if !on_board(session.rules().dimensions(), action) {
            writeln!(output, "That cell is not on the board")?;
            continue;
        }

        if submit(manager, channel, &actor, action) {
            if let Some(session) = manager.get(channel) {
                writeln!(output, "{}", session.render_current_state())?;
            }
        }
    }
}

fn on_board((rows, cols): (usize, usize), action: Action) -> bool {
    match action {
        Action::Place { row, col } => row < rows && col < cols,
        _ => true,
    }
}

/// Forwards one action; `true` when the board changed.
fn submit(manager: &mut SessionManager, channel: &str, actor: &Participant, action: Action) -> bool {
    match manager.apply(channel, actor, action) {
        Ok(_) => true,
        Err(SessionError::Move(e)) if e.is_expected() => {
            debug!(channel, %action, error = %e, "Ignoring rejected action");
            false
        }
        Err(e) => {
            error!(channel, %action, error = %e, "Action failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::any_game::AnyGame;
    use crate::games::players::{Seat, Seats};
    use crate::games::tictactoe::{TicTacToe, Variant};

    fn manager() -> SessionManager {
        let mut manager = SessionManager::new();
        let seats = Seats::pair(
            Participant::member("1", "ana"),
            Participant::member("2", "ben"),
        )
        .unwrap();
        manager
            .create("chan", seats, TicTacToe::new(Variant::Classic))
            .unwrap();
        manager
    }

    #[tokio::test]
    async fn test_hot_seat_game_to_win() {
        let mut manager = manager();
        let script = "1 1\n2 1\n1 2\nbogus\n2 2\n2 2\n1 3\n";
        let mut out = Vec::new();
        let finish = run(
            &mut manager,
            "chan",
            Duration::from_secs(5),
            script.as_bytes(),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(finish, Finish::Decided(GameResult::Win(Seat::First)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command `bogus`"));
        assert!(text.ends_with("`ana` won!\n"));
        assert!(manager.is_empty());
    }

    #[tokio::test]
    async fn test_stop_discards_session() {
        let mut manager = manager();
        let mut out = Vec::new();
        let finish = run(
            &mut manager,
            "chan",
            Duration::from_secs(5),
            "ben: 1 1\nx\n".as_bytes(),
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(finish, Finish::Stopped);
        assert!(String::from_utf8(out).unwrap().ends_with("⛔ Stopped\n"));
        assert!(manager.get("chan").is_none());
    }

    #[tokio::test]
    async fn test_idle_timeout() {
        let mut manager = manager();
        let (_writer, reader) = tokio::io::duplex(64);
        let mut out = Vec::new();
        let finish = run(
            &mut manager,
            "chan",
            Duration::from_millis(20),
            tokio::io::BufReader::new(reader),
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(finish, Finish::TimedOut);
        assert!(String::from_utf8(out).unwrap().ends_with("⏰ Timed Out\n"));
        assert!(manager.is_empty());
    }

    #[tokio::test]
    async fn test_off_board_cell_is_not_forwarded() {
        let mut manager = manager();
        let mut out = Vec::new();
        let finish = run(
            &mut manager,
            "chan",
            Duration::from_secs(5),
            "4 4\n".as_bytes(),
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(finish, Finish::Closed);
        assert!(String::from_utf8(out).unwrap().contains("not on the board"));
        let session = manager.get("chan").unwrap();
        assert!(matches!(
            session.rules(),
            AnyGame::TicTacToe(game) if game.history().is_empty()
        ));
    }
}
