//! Environment-driven settings
//!
//! | Variable | Default |
//! |---|---|
//! | `GUESS_MIN` / `GUESS_MAX` | 1 / 100 |
//! | `GUESS_BIND_ADDR` | `0.0.0.0:5000` |
//! | `GUESS_SESSION_SECRET` | random in debug builds, required in release |
//! | `GUESS_MAX_SESSIONS` | 100000 |

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use guess::{GameConfig, GuessRange};
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Settings {
    pub bind_addr: SocketAddr,
    pub game: GameConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min: i64 = parse_var(&lookup, "GUESS_MIN")?.unwrap_or(GuessRange::DEFAULT.min());
        let max: i64 = parse_var(&lookup, "GUESS_MAX")?.unwrap_or(GuessRange::DEFAULT.max());
        let Some(range) = GuessRange::new(min, max) else {
            bail!("GUESS_MIN ({min}) must not exceed GUESS_MAX ({max})");
        };

        let bind_addr = lookup("GUESS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("GUESS_BIND_ADDR must be a socket address")?;

        let max_sessions: Option<usize> = parse_var(&lookup, "GUESS_MAX_SESSIONS")?;
        if max_sessions == Some(0) {
            bail!("GUESS_MAX_SESSIONS must be at least 1");
        }

        let base = match lookup("GUESS_SESSION_SECRET") {
            Some(secret_b64) => GameConfig {
                session_secret: decode_secret(&secret_b64)?,
                cookie_secure: !development,
                ..GameConfig::default()
            },
            None if development => GameConfig::development(),
            None => bail!("GUESS_SESSION_SECRET must be set in production"),
        };

        Ok(Self {
            bind_addr,
            game: GameConfig {
                range,
                max_sessions: max_sessions.unwrap_or(base.max_sessions),
                ..base
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("{key} must be an integer: {e}"))
        })
        .transpose()
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("GUESS_SESSION_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| {
            anyhow::anyhow!("GUESS_SESSION_SECRET must decode to 32 bytes, got {}", b.len())
        })
}
