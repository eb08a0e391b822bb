//! Number Guessing Game Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Game session entity, guess evaluation, repository traits
//! - `application/` - Use cases (view, guess, reset)
//! - `infra/` - Session store implementations
//! - `presentation/` - HTTP handlers and HTML rendering
//!
//! ## Session Model
//! - Sessions live server-side in an injected store keyed by session id
//! - The browser holds only an HMAC-signed token in an HTTP-only cookie
//! - Unknown, forged or expired tokens silently start a new game

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GameConfig;
pub use domain::repository::GameSessionRepository;
pub use domain::services::{FixedSecret, RandomSecret, SecretSource};
pub use domain::value_objects::GuessRange;
pub use error::{GuessError, GuessResult};
pub use infra::memory::InMemoryGameRepository;
pub use presentation::router::{game_router, game_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
