//! Repository Traits
//!
//! Interfaces for session storage. Implementations live in the infra layer.

use crate::domain::entities::GameSession;
use crate::error::GuessResult;
use kernel::id::GameSessionId;

/// Game session store, keyed by session id
#[trait_variant::make(GameSessionRepository: Send)]
pub trait LocalGameSessionRepository {
    /// Get a live session; expired entries are reported as absent
    async fn get(&self, session_id: GameSessionId) -> GuessResult<Option<GameSession>>;

    /// Insert or replace a session (last write wins)
    async fn save(&self, session: &GameSession) -> GuessResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: GameSessionId) -> GuessResult<()>;

    /// Remove expired sessions, returning how many were dropped
    async fn cleanup_expired(&self) -> GuessResult<u64>;
}
