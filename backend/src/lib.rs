//! # Trivia API
//!
//! Backend for a trivia-question game.
//!
//! The crate serves trivia categories and questions over a JSON HTTP API:
//! paginated listing, substring search, per-category listing, question
//! creation and deletion, and a quiz endpoint that draws a random question
//! the player has not seen yet.
//!
//! ## Architecture
//!
//! - [`models`]: Question and category entities
//! - [`db`]: Repository traits and the in-memory / PostgreSQL stores
//! - [`services`]: Pagination, search, quiz selection, mutations
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum router, handlers and JSON error bodies
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
