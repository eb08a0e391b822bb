//! Domain Value Objects
//!
//! Immutable value types for the guessing game.

use crate::error::{GuessError, GuessResult};
use std::str::FromStr;

/// Closed range of guessable values, `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRange {
    min: i64,
    max: i64,
}

impl GuessRange {
    pub const DEFAULT: GuessRange = GuessRange { min: 1, max: 100 };

    pub fn new(min: i64, max: i64) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A parsed guess
///
/// Any integer is accepted, including values outside the game range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess(i64);

impl Guess {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(raw: &str) -> GuessResult<Self> {
        raw.trim()
            .parse::<i64>()
            .map(Guess)
            .map_err(|_| GuessError::InvalidInput)
    }
}

/// Result of comparing a valid guess with the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; carries the total attempts including this one
    Correct { guess: i64, attempts: u32 },
    /// The secret is greater than the guess
    Higher,
    /// The secret is smaller than the guess
    Lower,
}

impl GuessOutcome {
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Correct { guess, .. } => {
                format!("Congratulations! {} is correct!", guess)
            }
            GuessOutcome::Higher => "Guess higher!".to_string(),
            GuessOutcome::Lower => "Guess lower!".to_string(),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

/// Game state derived from the `won` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Active,
    Won,
}
