//! Seats and the participants that occupy them.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// One of the two seats at a game (the turn cursor's value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Seat {
    /// Seat 0, which moves first.
    #[display("seat 0")]
    First,
    /// Seat 1.
    #[display("seat 1")]
    Second,
}

impl Seat {
    /// Both seats in turn order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// The opposite seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Position of the seat in turn order.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Someone taking part in a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participant {
    /// A member of the chat platform.
    Member {
        /// Stable identity used for turn checks.
        id: String,
        /// Name shown in status lines.
        name: String,
    },
    /// The bot itself, playing the engine-controlled seat.
    Engine {
        /// Name shown in status lines.
        name: String,
    },
}

impl Participant {
    /// Creates a member participant.
    pub fn member(id: impl Into<String>, name: impl Into<String>) -> Self {
        Participant::Member {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates the engine-controlled sentinel.
    pub fn engine(name: impl Into<String>) -> Self {
        Participant::Engine { name: name.into() }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Participant::Member { name, .. } | Participant::Engine { name } => name,
        }
    }

    /// Whether this is the engine sentinel.
    pub fn is_engine(&self) -> bool {
        matches!(self, Participant::Engine { .. })
    }

    /// Identity comparison: members by id, every engine sentinel is the same actor.
    pub fn same_as(&self, other: &Participant) -> bool {
        match (self, other) {
            (Participant::Member { id: a, .. }, Participant::Member { id: b, .. }) => a == b,
            (Participant::Engine { .. }, Participant::Engine { .. }) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Seating could not be arranged.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SeatError {
    /// Both seats would hold the same participant.
    #[display("You can't play against yourself!")]
    SelfPlay,
}

/// Ordered pair of distinct participants, indexed by [`Seat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    players: [Participant; 2],
}

impl Seats {
    /// Seats two participants; `first` moves first.
    pub fn pair(first: Participant, second: Participant) -> Result<Self, SeatError> {
        if first.same_as(&second) {
            return Err(SeatError::SelfPlay);
        }
        Ok(Self {
            players: [first, second],
        })
    }

    /// Seats a single participant against the engine sentinel.
    pub fn solo(player: Participant, engine_name: impl Into<String>) -> Result<Self, SeatError> {
        Self::pair(player, Participant::engine(engine_name))
    }

    /// The participant in `seat`.
    pub fn get(&self, seat: Seat) -> &Participant {
        &self.players[seat.index()]
    }

    /// Seat held by `participant`, if any.
    pub fn seat_of(&self, participant: &Participant) -> Option<Seat> {
        Seat::BOTH
            .into_iter()
            .find(|seat| self.get(*seat).same_as(participant))
    }

    /// Finds a participant by display name (case-insensitive).
    pub fn by_name(&self, name: &str) -> Option<&Participant> {
        self.players
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}
