//! HTTP server module for the trivia API.
//!
//! This module provides an axum-based HTTP server that exposes the question
//! services as a JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing, lenient paging                        │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error bodies                        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Pagination, search, quiz selection                     │
//! │  - Question creation and deletion                         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository / PostgresRepository                   │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;

/// Build the request-handling application from configuration.
///
/// Creates the configured repository and wires it into the router.
#[cfg(feature = "http-server")]
pub async fn build_app(config: &crate::config::AppConfig) -> anyhow::Result<axum::Router> {
    let repository = crate::db::RepositoryFactory::from_config(config).await?;
    let state = AppState::new(repository).with_page_size(config.api.questions_per_page);
    Ok(create_router(state))
}
