//! Terminal input grammar.
//!
//! A line is `[<name>:] <command>`. Commands map onto [`Action`] codes,
//! except `stop`, which ends the session without touching the game.

use crate::games::action::Action;
use crate::games::board::Direction;
use crate::games::rps::Hand;
use derive_more::{Display, Error};

/// What a line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the game.
    Act(Action),
    /// Abandon the game.
    Stop,
}

/// A parsed line: optional actor name plus command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Name given before `:`, if any.
    pub actor: Option<String>,
    /// The command.
    pub command: Command,
}

/// A line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Nothing but whitespace.
    #[display("empty input")]
    Empty,
    /// Unrecognised command.
    #[display("Unknown command `{}`", _0)]
    Unknown(#[error(not(source))] String),
    /// A cell reference with a zero or unparsable coordinate.
    #[display("Bad cell `{}`: use `<row> <col>` or `b2`, counting from 1", _0)]
    BadCell(#[error(not(source))] String),
}

/// Parses one line of input.
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }
    let (actor, rest) = match line.split_once(':') {
        Some((name, rest)) if !name.trim().is_empty() && !name.trim().contains(' ') => {
            (Some(name.trim().to_string()), rest.trim())
        }
        _ => (None, line),
    };
    if rest.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(Input {
        actor,
        command: parse_command(rest)?,
    })
}

/// Parses a command without actor prefix.
pub fn parse_command(text: &str) -> Result<Command, ParseError> {
    let lower = text.trim().to_lowercase();
    let word = lower.as_str();

    match word {
        "x" | "stop" | "⛔" => return Ok(Command::Stop),
        "r" | "restart" | "🔄" => return Ok(Command::Act(Action::Restart)),
        "n" | "next" | "⏩" => return Ok(Command::Act(Action::NextLevel)),
        _ => {}
    }
    if let Some(direction) = parse_direction(word) {
        return Ok(Command::Act(Action::Move(direction)));
    }
    if let Some(hand) = parse_hand(word) {
        return Ok(Command::Act(Action::Choose(hand)));
    }
    if word.starts_with(|c: char| c.is_ascii_digit() || c.is_ascii_lowercase()) {
        if let Some((row, col)) = parse_cell(word)? {
            return Ok(Command::Act(Action::Place { row, col }));
        }
    }
    Err(ParseError::Unknown(text.trim().to_string()))
}

fn parse_direction(word: &str) -> Option<Direction> {
    let direction = match word {
        "w" | "up" | "⬆" | "⬆️" => Direction::Up,
        "s" | "down" | "⬇" | "⬇️" => Direction::Down,
        "a" | "left" | "⬅" | "⬅️" => Direction::Left,
        "d" | "right" | "➡" | "➡️" => Direction::Right,
        "q" | "up-left" | "↖" | "↖️" => Direction::UpLeft,
        "e" | "up-right" | "↗" | "↗️" => Direction::UpRight,
        "z" | "down-left" | "↙" | "↙️" => Direction::DownLeft,
        "c" | "down-right" | "↘" | "↘️" => Direction::DownRight,
        _ => return None,
    };
    Some(direction)
}

fn parse_hand(word: &str) -> Option<Hand> {
    match word {
        "🪨" => Some(Hand::Rock),
        "📄" => Some(Hand::Paper),
        "✂" | "✂️" => Some(Hand::Scissors),
        _ => word.parse().ok(),
    }
}

/// `"2 3"` or `"b2"` (column letter, row number), both 1-based.
///
/// `Ok(None)` means the text is not shaped like a cell at all.
fn parse_cell(word: &str) -> Result<Option<(usize, usize)>, ParseError> {
    let bad = || ParseError::BadCell(word.to_string());
    let one_based = |n: usize| n.checked_sub(1).ok_or_else(bad);

    let parts: Vec<&str> = word
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if let [row, col] = parts.as_slice() {
        let row = row.parse::<usize>().map_err(|_| bad())?;
        let col = col.parse::<usize>().map_err(|_| bad())?;
        return Ok(Some((one_based(row)?, one_based(col)?)));
    }

    let mut chars = word.chars();
    let Some(letter) = chars.next().filter(char::is_ascii_lowercase) else {
        return Ok(None);
    };
    let digits = chars.as_str();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    let row = digits.parse::<usize>().map_err(|_| bad())?;
    let col = usize::from(letter as u8 - b'a');
    Ok(Some((one_based(row)?, col)))
}
