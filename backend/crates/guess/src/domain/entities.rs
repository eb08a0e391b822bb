//! Domain Entities
//!
//! The per-player game session.

use crate::domain::services::SecretSource;
use crate::domain::value_objects::{GameState, Guess, GuessOutcome, GuessRange};
use crate::error::GuessResult;
use chrono::{DateTime, Utc};
use kernel::id::GameSessionId;
use std::cmp::Ordering;

/// GameSession entity - one player's game
///
/// `secret` never changes after creation; a reset replaces the whole entity.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameSessionId,
    pub secret: i64,
    pub attempts: u32,
    pub won: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at_ms: i64,
}

impl GameSession {
    /// Start a new game with a secret drawn from `range`
    pub fn start(range: GuessRange, secrets: &dyn SecretSource, ttl_ms: i64) -> Self {
        let now = Utc::now();
        Self {
            id: GameSessionId::new(),
            secret: secrets.draw(range),
            attempts: 0,
            won: false,
            created_at: now,
            expires_at_ms: now.timestamp_millis().saturating_add(ttl_ms),
        }
    }

    /// Evaluate a raw form value against the secret
    ///
    /// Unparseable input is rejected before any state changes. Every parsed
    /// guess counts as an attempt, out-of-range values and guesses after a win
    /// included.
    pub fn evaluate_guess(&mut self, raw: &str) -> GuessResult<GuessOutcome> {
        let guess: Guess = raw.parse()?;
        self.attempts = self.attempts.saturating_add(1);

        let outcome = match guess.value().cmp(&self.secret) {
            Ordering::Equal => {
                self.won = true;
                GuessOutcome::Correct {
                    guess: guess.value(),
                    attempts: self.attempts,
                }
            }
            Ordering::Less => GuessOutcome::Higher,
            Ordering::Greater => GuessOutcome::Lower,
        };

        Ok(outcome)
    }

    pub fn state(&self) -> GameState {
        if self.won {
            GameState::Won
        } else {
            GameState::Active
        }
    }

    /// Push the expiry out by `ttl_ms` from now
    pub fn touch(&mut self, ttl_ms: i64) {
        self.expires_at_ms = Utc::now().timestamp_millis().saturating_add(ttl_ms);
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }
}
