//! Game sessions and the per-channel session registry.

use crate::games::action::{Action, MoveError};
use crate::games::any_game::AnyGame;
use crate::games::phases::GameResult;
use crate::games::players::{Participant, Seat, Seats};
use crate::games::rules::RuleSet;
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Identifier the adapter assigns to a live game (a channel or message id).
pub type ChannelId = String;

/// A rule set bound to the participants playing it.
#[derive(Debug, Clone)]
pub struct Session<R> {
    id: ChannelId,
    seats: Seats,
    rules: R,
}

impl<R: RuleSet> Session<R> {
    /// Creates a session.
    #[instrument(skip_all, fields(game = rules.name()))]
    pub fn new(id: impl Into<ChannelId>, seats: Seats, rules: R) -> Self {
        let id = id.into();
        info!(
            session_id = %id,
            first = %seats.get(Seat::First),
            second = %seats.get(Seat::Second),
            "Creating game session"
        );
        Self { id, seats, rules }
    }

    /// Session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Who is playing.
    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    /// The wrapped rule set.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The participant whose action is awaited, `None` once decided.
    pub fn current_actor(&self) -> Option<&Participant> {
        self.rules.to_move().map(|seat| self.seats.get(seat))
    }

    /// Routes `action` from `actor` to the rule set.
    ///
    /// # Errors
    ///
    /// `NotYourTurn` when `actor` is not seated. A seated actor's action
    /// always reaches the rule set, which reports why it was refused
    /// (wrong turn, a second choice, ...). State is unchanged on error.
    #[instrument(skip(self, actor), fields(session_id = %self.id, actor = %actor))]
    pub fn apply_action(
        &mut self,
        actor: &Participant,
        action: Action,
    ) -> Result<GameResult, MoveError> {
        let Some(seat) = self.seats.seat_of(actor) else {
            debug!("Actor is not seated in this session");
            let expected = self.rules.to_move().unwrap_or(Seat::First);
            return Err(MoveError::NotYourTurn(expected));
        };
        if !self.rules.may_act(seat) {
            debug!(%seat, "Seat may not act now");
        }

        match self.rules.apply(seat, action) {
            Ok(result) => {
                info!(%seat, %action, %result, "Action applied");
                Ok(result)
            }
            Err(e) if e.is_expected() => {
                debug!(%seat, %action, error = %e, "Action rejected");
                Err(e)
            }
            Err(e) => {
                warn!(%seat, %action, error = %e, "Action failed");
                Err(e)
            }
        }
    }

    /// Whether the game is decided.
    pub fn is_terminal(&self) -> bool {
        self.rules.result().is_terminal()
    }

    /// Terminal flag plus the winner, if any.
    pub fn terminal(&self) -> (bool, Option<&Participant>) {
        let result = self.rules.result();
        (
            result.is_terminal(),
            result.winner().map(|seat| self.seats.get(seat)),
        )
    }

    /// Board (or banner) followed by the status line.
    pub fn render_current_state(&self) -> String {
        let status = self.rules.status(&self.seats);
        let board = self.rules.render();
        match (board.is_empty(), status.is_empty()) {
            (_, true) => board,
            (true, false) => status,
            (false, false) => format!("{}\n{}", board, status),
        }
    }
}

/// Session registry failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// A game is already running on the channel.
    #[display("A game is already running in {}", _0)]
    #[from(ignore)]
    ChannelBusy(#[error(not(source))] ChannelId),
    /// No game is running on the channel.
    #[display("No game is running in {}", _0)]
    #[from(ignore)]
    NoSession(#[error(not(source))] ChannelId),
    /// The game refused the action.
    #[display("{}", _0)]
    Move(MoveError),
}

#[derive(Debug)]
struct Entry {
    session: Session<AnyGame>,
    last_activity: Instant,
}

/// Live sessions keyed by channel.
///
/// Each session is owned exclusively by its entry; callers deliver one
/// action at a time, so no locking is involved.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<ChannelId, Entry>,
}

impl SessionManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on `channel`.
    #[instrument(skip(self, seats, game), fields(game = game.name()))]
    pub fn create(
        &mut self,
        channel: &str,
        seats: Seats,
        game: impl Into<AnyGame> + RuleSet,
    ) -> Result<&Session<AnyGame>, SessionError> {
        if self.sessions.contains_key(channel) {
            warn!(channel, "Channel already has a live session");
            return Err(SessionError::ChannelBusy(channel.to_string()));
        }
        let session = Session::new(channel, seats, game.into());
        let entry = self.sessions.entry(channel.to_string()).or_insert(Entry {
            session,
            last_activity: Instant::now(),
        });
        Ok(&entry.session)
    }

    /// Session on `channel`, if any.
    pub fn get(&self, channel: &str) -> Option<&Session<AnyGame>> {
        self.sessions.get(channel).map(|entry| &entry.session)
    }

    /// Applies an action on `channel` and refreshes its activity clock.
    #[instrument(skip(self, actor))]
    pub fn apply(
        &mut self,
        channel: &str,
        actor: &Participant,
        action: Action,
    ) -> Result<GameResult, SessionError> {
        let entry = self
            .sessions
            .get_mut(channel)
            .ok_or_else(|| SessionError::NoSession(channel.to_string()))?;
        entry.last_activity = Instant::now();
        Ok(entry.session.apply_action(actor, action)?)
    }

    /// Drops the session on `channel`.
    #[instrument(skip(self))]
    pub fn discard(&mut self, channel: &str) -> Option<Session<AnyGame>> {
        let removed = self.sessions.remove(channel).map(|entry| entry.session);
        if removed.is_some() {
            info!(channel, "Session discarded");
        }
        removed
    }

    /// Removes and returns every session idle for at least `timeout` as of `now`.
    #[instrument(skip(self))]
    pub fn expire_idle(&mut self, now: Instant, timeout: Duration) -> Vec<Session<AnyGame>> {
        let stale: Vec<ChannelId> = self
            .sessions
            .iter()
            .filter(|(_, entry)| now.saturating_duration_since(entry.last_activity) >= timeout)
            .map(|(channel, _)| channel.clone())
            .collect();
        let expired: Vec<_> = stale
            .iter()
            .filter_map(|channel| self.sessions.remove(channel))
            .map(|entry| entry.session)
            .collect();
        if !expired.is_empty() {
            info!(count = expired.len(), "Expired idle sessions");
        }
        expired
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
