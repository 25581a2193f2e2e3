//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::services::{RandomSource, ThreadRandom, QUESTIONS_PER_PAGE};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Source of quiz draws
    pub random: Arc<dyn RandomSource>,
    /// Page size for every paginated listing
    pub questions_per_page: usize,
}

impl AppState {
    /// Create a new application state with the given repository, drawing quiz
    /// questions from the thread-local RNG.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self::with_random(repository, Arc::new(ThreadRandom))
    }

    pub fn with_random(repository: Arc<dyn FullRepository>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            repository,
            random,
            questions_per_page: QUESTIONS_PER_PAGE,
        }
    }

    pub fn with_page_size(mut self, questions_per_page: usize) -> Self {
        self.questions_per_page = questions_per_page;
        self
    }
}
