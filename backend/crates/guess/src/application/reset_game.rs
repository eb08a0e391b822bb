//! Reset Game Use Case

use crate::application::config::GameConfig;
use crate::application::session::{GameView, start_new_game, verify_session_token};
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::SecretSource;
use crate::error::GuessResult;
use std::sync::Arc;

/// Reset Game Use Case
pub struct ResetGameUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
    config: Arc<GameConfig>,
    secrets: Arc<dyn SecretSource>,
}

impl<R> ResetGameUseCase<R>
where
    R: GameSessionRepository + Sync,
{
    pub fn new(repo: Arc<R>, config: Arc<GameConfig>, secrets: Arc<dyn SecretSource>) -> Self {
        Self {
            repo,
            config,
            secrets,
        }
    }

    /// Drop the caller's session (if any) and start a new game
    pub async fn execute(&self, token: Option<&str>) -> GuessResult<GameView> {
        if let Some(old_id) =
            token.and_then(|t| verify_session_token(t, &self.config.session_secret))
        {
            self.repo.delete(old_id).await?;
            tracing::info!(session_id = %old_id, "Discarded game session");
        }

        let session =
            start_new_game(self.repo.as_ref(), &self.config, self.secrets.as_ref()).await?;

        Ok(GameView::from_session(&session, &self.config))
    }
}
