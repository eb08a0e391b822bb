//! Application Configuration
//!
//! Everything the game needs at runtime is passed in here; nothing is read
//! from process-global state.

use crate::domain::value_objects::GuessRange;
use platform::cookie::CookieConfig;
use std::time::Duration;

pub use platform::cookie::SameSite;

/// Game application configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Closed range the secret is drawn from
    pub range: GuessRange,
    /// Idle time after which a session is dropped
    pub session_ttl: Duration,
    /// How often the background sweeper runs
    pub cleanup_interval: Duration,
    /// Upper bound on live sessions held by the in-memory store
    pub max_sessions: usize,
    /// Cookie name for the session token
    pub session_cookie_name: String,
    /// HMAC key for session tokens (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            range: GuessRange::DEFAULT,
            session_ttl: Duration::from_secs(24 * 3600),
            cleanup_interval: Duration::from_secs(600),
            max_sessions: 100_000,
            session_cookie_name: "guess_session".to_string(),
            session_secret: platform::crypto::random_key(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl GameConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Session TTL in milliseconds, saturating at `i64::MAX`
    pub fn session_ttl_ms(&self) -> i64 {
        i64::try_from(self.session_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    /// Cookie settings for the session token
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}
