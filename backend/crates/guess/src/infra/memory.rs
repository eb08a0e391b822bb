//! In-Memory Repository Implementation

use crate::domain::entities::GameSession;
use crate::domain::repository::GameSessionRepository;
use crate::error::{GuessError, GuessResult};
use chrono::Utc;
use kernel::id::GameSessionId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local session store
///
/// Clones share the same map. Saving a new session into a full store fails
/// with [`GuessError::Store`] once expired entries have been swept.
#[derive(Clone)]
pub struct InMemoryGameRepository {
    sessions: Arc<RwLock<HashMap<GameSessionId, GameSession>>>,
    max_sessions: usize,
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::with_max_sessions(usize::MAX)
    }
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    /// Number of stored sessions, expired ones included
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl GameSessionRepository for InMemoryGameRepository {
    async fn get(&self, session_id: GameSessionId) -> GuessResult<Option<GameSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(&session_id)
            .filter(|session| !session.is_expired())
            .cloned())
    }

    async fn save(&self, session: &GameSession) -> GuessResult<()> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) && sessions.len() >= self.max_sessions {
            let now_ms = Utc::now().timestamp_millis();
            sessions.retain(|_, stored| !stored.is_expired_at(now_ms));
            if sessions.len() >= self.max_sessions {
                return Err(GuessError::Store(format!(
                    "session store is full ({} sessions)",
                    self.max_sessions
                )));
            }
        }
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: GameSessionId) -> GuessResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> GuessResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now_ms));
        let removed = (before - sessions.len()) as u64;

        tracing::debug!(removed, remaining = sessions.len(), "Swept game sessions");

        Ok(removed)
    }
}
