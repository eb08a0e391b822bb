//! Domain Services
//!
//! Secret drawing, kept behind a trait so tests can pin the secret.

use crate::domain::value_objects::GuessRange;
use rand::Rng;

/// Source of new secrets
pub trait SecretSource: Send + Sync {
    /// Draw a secret; the result must lie inside `range`
    fn draw(&self, range: GuessRange) -> i64;
}

/// Uniform draw from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecret;

impl SecretSource for RandomSecret {
    fn draw(&self, range: GuessRange) -> i64 {
        rand::rng().random_range(range.min()..=range.max())
    }
}

/// Always yields the same value, clamped into the range
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub i64);

impl SecretSource for FixedSecret {
    fn draw(&self, range: GuessRange) -> i64 {
        self.0.clamp(range.min(), range.max())
    }
}
