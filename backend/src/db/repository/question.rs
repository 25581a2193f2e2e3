//! Question repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{CategoryId, NewQuestion, Question, QuestionId};

/// Repository trait for question storage.
///
/// Implementations return questions ordered by id so that pagination over
/// the results is stable between requests.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Reads ====================

    /// List every stored question.
    async fn list_questions(&self) -> RepositoryResult<Vec<Question>>;

    /// List the questions whose category equals `category_id` exactly.
    async fn list_questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> RepositoryResult<Vec<Question>>;

    /// Fetch a single question.
    ///
    /// # Returns
    /// * `Ok(Some(Question))` - The question exists
    /// * `Ok(None)` - No question has this id
    /// * `Err(RepositoryError)` - If the lookup itself fails
    async fn get_question(&self, question_id: QuestionId) -> RepositoryResult<Option<Question>>;

    // ==================== Writes ====================

    /// Persist a new question and return it with its assigned id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - The category does not exist
    /// * `Err(RepositoryError)` - Any other store failure
    async fn insert_question(&self, question: &NewQuestion) -> RepositoryResult<Question>;

    /// Delete a question.
    ///
    /// # Returns
    /// * `Ok(())` - The question was removed
    /// * `Err(RepositoryError::NotFound)` - No question has this id
    /// * `Err(RepositoryError)` - The delete failed
    async fn delete_question(&self, question_id: QuestionId) -> RepositoryResult<()>;
}
