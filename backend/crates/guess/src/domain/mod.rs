//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (GameSession)
//! - Domain value objects (GuessRange, Guess, GuessOutcome)
//! - Domain services (secret drawing)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
