//! Game Router

use crate::application::config::GameConfig;
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::{RandomSecret, SecretSource};
use crate::infra::memory::InMemoryGameRepository;
use crate::presentation::handlers::{self, GameAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the game router with the in-memory store and random secrets
pub fn game_router(repo: InMemoryGameRepository, config: GameConfig) -> Router {
    game_router_generic(repo, config, Arc::new(RandomSecret))
}

/// Create a game router for any store and secret source
pub fn game_router_generic<R>(
    repo: R,
    config: GameConfig,
    secrets: Arc<dyn SecretSource>,
) -> Router
where
    R: GameSessionRepository + Clone + Send + Sync + 'static,
{
    let state = GameAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        secrets,
    };

    Router::new()
        .route("/", get(handlers::view_game::<R>))
        .route("/guess", post(handlers::submit_guess::<R>))
        .route(
            "/reset",
            get(handlers::reset_game::<R>).post(handlers::reset_game::<R>),
        )
        .route("/style.css", get(handlers::stylesheet))
        .with_state(state)
}
