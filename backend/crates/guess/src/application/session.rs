//! Session resolution shared by the use cases

use crate::application::config::GameConfig;
use crate::domain::entities::GameSession;
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::SecretSource;
use crate::domain::value_objects::GuessRange;
use crate::error::GuessResult;
use kernel::id::GameSessionId;

/// Create a signed session token
pub fn create_session_token(session_id: &GameSessionId, secret: &[u8; 32]) -> String {
    platform::crypto::sign_token(session_id.as_bytes(), secret)
}

/// Verify and extract the session ID from a signed token
pub fn verify_session_token(token: &str, secret: &[u8; 32]) -> Option<GameSessionId> {
    platform::crypto::verify_token(token, secret).map(GameSessionId::from_bytes)
}

/// Snapshot of a session as shown to the player
///
/// Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub session_token: String,
    pub range: GuessRange,
    pub attempts: u32,
    pub won: bool,
}

impl GameView {
    pub fn from_session(session: &GameSession, config: &GameConfig) -> Self {
        Self {
            session_token: create_session_token(&session.id, &config.session_secret),
            range: config.range,
            attempts: session.attempts,
            won: session.won,
        }
    }
}

/// Look up the session behind `token`, if it verifies and is still live
pub async fn find_session<R>(
    repo: &R,
    config: &GameConfig,
    token: Option<&str>,
) -> GuessResult<Option<GameSession>>
where
    R: GameSessionRepository + Sync,
{
    let Some(session_id) = token.and_then(|t| verify_session_token(t, &config.session_secret))
    else {
        return Ok(None);
    };

    repo.get(session_id).await
}

/// Start and persist a fresh game
pub async fn start_new_game<R>(
    repo: &R,
    config: &GameConfig,
    secrets: &dyn SecretSource,
) -> GuessResult<GameSession>
where
    R: GameSessionRepository + Sync,
{
    let session = GameSession::start(config.range, secrets, config.session_ttl_ms());
    repo.save(&session).await?;

    tracing::info!(session_id = %session.id, "Started new game");
    tracing::debug!(session_id = %session.id, secret = session.secret, "Drew secret");

    Ok(session)
}
