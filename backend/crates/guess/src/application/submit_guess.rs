//! Submit Guess Use Case

use crate::application::config::GameConfig;
use crate::application::session::{GameView, find_session, start_new_game};
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::SecretSource;
use crate::domain::value_objects::GuessOutcome;
use crate::error::{GuessError, GuessResult};
use std::sync::Arc;

/// Styling class of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Hint,
    Error,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Hint => "hint",
            FeedbackKind::Error => "error",
        }
    }
}

/// Message shown to the player after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl From<GuessOutcome> for Feedback {
    fn from(outcome: GuessOutcome) -> Self {
        let kind = if outcome.is_correct() {
            FeedbackKind::Success
        } else {
            FeedbackKind::Hint
        };
        Self {
            kind,
            message: outcome.message(),
        }
    }
}

/// Output DTO for submit guess
#[derive(Debug, Clone)]
pub struct SubmitGuessOutput {
    pub view: GameView,
    pub feedback: Feedback,
    /// `None` when the input was rejected
    pub outcome: Option<GuessOutcome>,
}

/// Submit Guess Use Case
pub struct SubmitGuessUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
    config: Arc<GameConfig>,
    secrets: Arc<dyn SecretSource>,
}

impl<R> SubmitGuessUseCase<R>
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

    /// Evaluate `raw` against the caller's session
    ///
    /// Invalid input is reported through `feedback`; only store failures
    /// surface as errors.
    pub async fn execute(&self, token: Option<&str>, raw: &str) -> GuessResult<SubmitGuessOutput> {
        let mut session = match find_session(self.repo.as_ref(), &self.config, token).await? {
            Some(session) => session,
            None => {
                start_new_game(self.repo.as_ref(), &self.config, self.secrets.as_ref()).await?
            }
        };

        let (feedback, outcome) = match session.evaluate_guess(raw) {
            Ok(outcome) => {
                session.touch(self.config.session_ttl_ms());
                self.repo.save(&session).await?;

                tracing::info!(
                    session_id = %session.id,
                    attempts = session.attempts,
                    correct = outcome.is_correct(),
                    "Guess evaluated"
                );

                (Feedback::from(outcome), Some(outcome))
            }
            Err(err @ GuessError::InvalidInput) => {
                tracing::debug!(session_id = %session.id, "Rejected non-numeric guess");
                (
                    Feedback {
                        kind: FeedbackKind::Error,
                        message: err.to_string(),
                    },
                    None,
                )
            }
            Err(err) => return Err(err),
        };

        Ok(SubmitGuessOutput {
            view: GameView::from_session(&session, &self.config),
            feedback,
            outcome,
        })
    }
}
