//! Repository trait definitions for database operations.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`question`]: Question reads, inserts and deletes
//! - [`category`]: Read-only category lookups
//!
//! # Convenience Trait Bound
//!
//! Services take `&dyn FullRepository` so a single handle reaches both
//! collections:
//!
//! ```ignore
//! async fn my_service(repo: &dyn FullRepository) -> RepositoryResult<usize> {
//!     let categories = repo.list_categories().await?;
//!     let questions = repo.list_questions().await?;
//!     Ok(categories.len() + questions.len())
//! }
//! ```

pub mod category;
pub mod error;
pub mod question;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use category::CategoryRepository;
pub use question::QuestionRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements both
/// [`QuestionRepository`] and [`CategoryRepository`].
pub trait FullRepository: QuestionRepository + CategoryRepository {}

impl<T> FullRepository for T where T: QuestionRepository + CategoryRepository {}
