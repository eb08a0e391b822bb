//! Game Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `guess::GuessError` and `kernel::error::AppError`.

mod settings;

use axum::Router;
use guess::{GameSessionRepository, InMemoryGameRepository, game_router};
use settings::Settings;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,guess=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    let game_config = settings.game;

    tracing::info!(
        min = game_config.range.min(),
        max = game_config.range.max(),
        secure_cookie = game_config.cookie_secure,
        max_sessions = game_config.max_sessions,
        "Game configuration loaded"
    );

    let store = InMemoryGameRepository::with_max_sessions(game_config.max_sessions);

    // Periodic sweep; a full store also sweeps on its own before refusing a session
    let sweeper_store = store.clone();
    let interval = game_config.cleanup_interval;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match sweeper_store.cleanup_expired().await {
                Ok(removed) => {
                    let remaining = sweeper_store.len().await;
                    tracing::info!(
                        sessions_deleted = removed,
                        sessions_remaining = remaining,
                        "Game session cleanup completed"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Game session cleanup failed, continuing anyway");
                }
            }
        }
    });

    // Build router
    let app = Router::new()
        .merge(game_router(store, game_config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = settings.bind_addr;
    tracing::info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
