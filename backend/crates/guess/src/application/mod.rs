//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the session store.

pub mod config;
pub mod reset_game;
pub mod session;
pub mod submit_guess;
pub mod view_game;
