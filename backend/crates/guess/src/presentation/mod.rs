//! Presentation Layer
//!
//! HTTP handlers, form DTOs and HTML rendering.

pub mod dto;
pub mod handlers;
pub mod page;
pub mod router;
