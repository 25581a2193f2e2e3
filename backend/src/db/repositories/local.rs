//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data lives behind a
//! single `RwLock`, so every write applies completely or not at all.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, DEFAULT_CATEGORIES};

/// In-memory local repository.
///
/// # Example
/// ```
/// use trivia_api::db::repositories::LocalRepository;
/// use trivia_api::db::CategoryRepository;
///
/// let repo = LocalRepository::with_default_categories();
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let categories = rt.block_on(repo.list_categories()).unwrap();
/// assert_eq!(categories.len(), 6);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,

    // ID counter
    next_question_id: i64,

    // Failure injection
    is_healthy: bool,
    fail_writes: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            questions: BTreeMap::new(),
            next_question_id: 1,
            is_healthy: true,
            fail_writes: false,
        }
    }
}

impl LocalData {
    fn ensure_healthy(&self, operation: &str) -> RepositoryResult<()> {
        if self.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection_with_context(
                "Local repository is marked unhealthy",
                ErrorContext::new(operation),
            ))
        }
    }

    fn ensure_writable(&self, operation: &str) -> RepositoryResult<()> {
        self.ensure_healthy(operation)?;
        if self.fail_writes {
            return Err(RepositoryError::internal_with_context(
                "Writes are disabled on this local repository",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the categories the application ships with.
    pub fn with_default_categories() -> Self {
        let repo = Self::new();
        for (id, kind) in DEFAULT_CATEGORIES {
            repo.insert_category(Category::new(id, kind));
        }
        repo
    }

    /// Add or replace a category.
    ///
    /// Categories are read-only through the API, so this is the seeding path
    /// for tests and local development.
    pub fn insert_category(&self, category: Category) {
        let mut data = self.data.write();
        data.categories.insert(category.id, category);
    }

    /// Set the health status for testing connection failures.
    ///
    /// An unhealthy repository fails every operation with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Make inserts and deletes fail while reads keep working.
    pub fn set_fail_writes(&self, fail: bool) {
        self.data.write().fail_writes = fail;
    }

    /// Clear all questions and categories. The id counter keeps running so
    /// ids handed out before the clear are never reissued.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.questions.clear();
        data.categories.clear();
    }

    /// Get the number of questions stored.
    pub fn question_count(&self) -> usize {
        self.data.read().questions.len()
    }
}

#[async_trait]
impl QuestionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_questions(&self) -> RepositoryResult<Vec<Question>> {
        let data = self.data.read();
        data.ensure_healthy("list_questions")?;
        Ok(data.questions.values().cloned().collect())
    }

    async fn list_questions_by_category(
        &self,
        category_id: CategoryId,
    ) -> RepositoryResult<Vec<Question>> {
        let data = self.data.read();
        data.ensure_healthy("list_questions_by_category")?;
        Ok(data
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn get_question(&self, question_id: QuestionId) -> RepositoryResult<Option<Question>> {
        let data = self.data.read();
        data.ensure_healthy("get_question")?;
        Ok(data.questions.get(&question_id).cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        let mut data = self.data.write();
        data.ensure_writable("insert_question")?;

        if !data.categories.contains_key(&question.category) {
            return Err(RepositoryError::validation_with_context(
                "Question references an unknown category",
                ErrorContext::new("insert_question")
                    .with_entity("category")
                    .with_entity_id(question.category),
            ));
        }

        let id = QuestionId(data.next_question_id);
        data.next_question_id += 1;

        let stored = question.clone().into_question(id);
        data.questions.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_question(&self, question_id: QuestionId) -> RepositoryResult<()> {
        let mut data = self.data.write();
        data.ensure_writable("delete_question")?;

        match data.questions.remove(&question_id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::not_found_with_context(
                "Question not found",
                ErrorContext::new("delete_question")
                    .with_entity("question")
                    .with_entity_id(question_id),
            )),
        }
    }
}

#[async_trait]
impl CategoryRepository for LocalRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let data = self.data.read();
        data.ensure_healthy("list_categories")?;
        Ok(data.categories.values().cloned().collect())
    }

    async fn get_category(&self, category_id: CategoryId) -> RepositoryResult<Option<Category>> {
        let data = self.data.read();
        data.ensure_healthy("get_category")?;
        Ok(data.categories.get(&category_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category: CategoryId(category),
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = LocalRepository::with_default_categories();
        let first = repo.insert_question(&new_question("a", 1)).await.unwrap();
        let second = repo.insert_question(&new_question("b", 1)).await.unwrap();

        assert_eq!(first.id, QuestionId(1));
        assert_eq!(second.id, QuestionId(2));
        assert_eq!(repo.question_count(), 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_category() {
        let repo = LocalRepository::with_default_categories();
        let err = repo
            .insert_question(&new_question("a", 99))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(repo.question_count(), 0);
    }

    #[tokio::test]
    async fn test_list_by_category_is_exact_match() {
        let repo = LocalRepository::with_default_categories();
        repo.insert_question(&new_question("science", 1)).await.unwrap();
        repo.insert_question(&new_question("art", 2)).await.unwrap();
        repo.insert_question(&new_question("more science", 1)).await.unwrap();

        let science = repo.list_questions_by_category(CategoryId(1)).await.unwrap();
        let texts: Vec<&str> = science.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(texts, vec!["science", "more science"]);
    }

    #[tokio::test]
    async fn test_delete_missing_question_is_not_found() {
        let repo = LocalRepository::with_default_categories();
        let err = repo.delete_question(QuestionId(5)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_failed_writes_leave_data_untouched() {
        let repo = LocalRepository::with_default_categories();
        let stored = repo.insert_question(&new_question("keep", 3)).await.unwrap();

        repo.set_fail_writes(true);
        assert!(repo.delete_question(stored.id).await.is_err());
        assert!(repo.insert_question(&new_question("new", 3)).await.is_err());
        assert_eq!(repo.question_count(), 1);

        // Reads still work
        assert!(repo.get_question(stored.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unhealthy_repository_fails_reads() {
        let repo = LocalRepository::with_default_categories();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo.list_categories().await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_clear_keeps_id_counter() {
        let repo = LocalRepository::with_default_categories();
        repo.insert_question(&new_question("a", 1)).await.unwrap();
        repo.clear();
        assert_eq!(repo.question_count(), 0);
        assert!(repo.list_categories().await.unwrap().is_empty());

        repo.insert_category(Category::new(1, "Science"));
        let q = repo.insert_question(&new_question("b", 1)).await.unwrap();
        assert_eq!(q.id, QuestionId(2));
    }
}
