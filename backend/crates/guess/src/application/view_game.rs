//! View Game Use Case

use crate::application::config::GameConfig;
use crate::application::session::{GameView, find_session, start_new_game};
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::SecretSource;
use crate::error::GuessResult;
use std::sync::Arc;

/// View Game Use Case
///
/// Read-only for an existing session; creates one when none is found.
pub struct ViewGameUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
    config: Arc<GameConfig>,
    secrets: Arc<dyn SecretSource>,
}

impl<R> ViewGameUseCase<R>
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

    pub async fn execute(&self, token: Option<&str>) -> GuessResult<GameView> {
        let session = match find_session(self.repo.as_ref(), &self.config, token).await? {
            Some(session) => session,
            None => {
                start_new_game(self.repo.as_ref(), &self.config, self.secrets.as_ref()).await?
            }
        };

        Ok(GameView::from_session(&session, &self.config))
    }
}
