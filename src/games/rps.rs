//! Simultaneous-choice rock-paper-scissors.
//!
//! Both seats commit a [`Hand`] in any order; choices stay hidden until the
//! second one arrives. Against the bot, the engine seat's hand is drawn up
//! front.

use super::action::{Action, Illegal, MoveError};
use super::phases::GameResult;
use super::players::{Seat, Seats};
use super::rules::RuleSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// One of the three hands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[repr(u8)]
pub enum Hand {
    /// Beats scissors.
    Rock = 1,
    /// Beats rock.
    Paper = 2,
    /// Beats paper.
    Scissors = 3,
}

impl Hand {
    /// Emoji shown on buttons and in results.
    pub fn glyph(self) -> &'static str {
        match self {
            Hand::Rock => "🪨",
            Hand::Paper => "📄",
            Hand::Scissors => "✂️",
        }
    }

    /// Emoji plus capitalised name, e.g. `🪨 Rock`.
    pub fn label(self) -> String {
        let name = match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        };
        format!("{} {}", self.glyph(), name)
    }

    /// The hand this one defeats.
    pub fn beats(self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Paper => Hand::Rock,
            Hand::Scissors => Hand::Paper,
        }
    }

    /// Compares two hands: `Greater` when `self` wins.
    pub fn versus(self, other: Hand) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.beats() == other {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// Draws a hand uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Hand {
        let all: Vec<Hand> = Hand::iter().collect();
        all[rng.random_range(0..all.len())]
    }
}

/// One round of rock-paper-scissors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RockPaperScissors {
    hands: [Option<Hand>; 2],
    result: GameResult,
}

impl Default for RockPaperScissors {
    fn default() -> Self {
        Self::new()
    }
}

impl RockPaperScissors {
    /// A round between two members; nothing chosen yet.
    pub fn new() -> Self {
        Self {
            hands: [None, None],
            result: GameResult::Pending,
        }
    }

    /// A round against the bot, whose hand (seat 1) is already committed.
    #[instrument]
    pub fn against_engine(engine_hand: Hand) -> Self {
        let mut round = Self::new();
        round.hands[Seat::Second.index()] = Some(engine_hand);
        round
    }

    /// Hand committed by `seat`, if any.
    pub fn hand(&self, seat: Seat) -> Option<Hand> {
        self.hands[seat.index()]
    }

    /// Commits `hand` for `seat` and decides the round once both have chosen.
    #[instrument(skip(self))]
    pub fn choose(&mut self, seat: Seat, hand: Hand) -> Result<GameResult, MoveError> {
        if self.result.is_terminal() {
            return Err(Illegal::GameOver.into());
        }
        let slot = &mut self.hands[seat.index()];
        if slot.is_some() {
            return Err(Illegal::AlreadyChosen.into());
        }
        *slot = Some(hand);
        debug!(%seat, "Hand committed");

        if let [Some(first), Some(second)] = self.hands {
            self.result = match first.versus(second) {
                Ordering::Equal => GameResult::Tie,
                Ordering::Greater => GameResult::Win(Seat::First),
                Ordering::Less => GameResult::Win(Seat::Second),
            };
            info!(%first, %second, result = %self.result, "Round decided");
        }
        Ok(self.result)
    }
}

impl RuleSet for RockPaperScissors {
    fn name(&self) -> &'static str {
        "rps"
    }

    fn dimensions(&self) -> (usize, usize) {
        (0, 0)
    }

    fn to_move(&self) -> Option<Seat> {
        if self.result.is_terminal() {
            return None;
        }
        Seat::BOTH.into_iter().find(|seat| self.hand(*seat).is_none())
    }

    fn may_act(&self, seat: Seat) -> bool {
        !self.result.is_terminal() && self.hand(seat).is_none()
    }

    fn apply(&mut self, seat: Seat, action: Action) -> Result<GameResult, MoveError> {
        match action {
            Action::Choose(hand) => self.choose(seat, hand),
            _ => Err(Illegal::Unsupported.into()),
        }
    }

    fn result(&self) -> GameResult {
        self.result
    }

    fn render(&self) -> String {
        match self.hands {
            [Some(first), Some(second)] => format!("{} vs {}", first.label(), second.label()),
            [first, second] => {
                let hidden = |hand: Option<Hand>| if hand.is_some() { "🔒" } else { "❔" };
                format!("{} vs {}", hidden(first), hidden(second))
            }
        }
    }

    fn status(&self, seats: &Seats) -> String {
        match self.result {
            GameResult::Pending => match self.to_move() {
                Some(seat) => format!(
                    "Waiting for **{}** to make their choice...",
                    seats.get(seat).name()
                ),
                None => String::new(),
            },
            GameResult::Win(seat) => format!("🎉 **{}** wins!", seats.get(seat).name()),
            GameResult::Tie => "🤝 It's a tie!".to_string(),
        }
    }
}
