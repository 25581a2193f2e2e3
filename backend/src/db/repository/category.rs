//! Category repository trait.
//!
//! Categories are read-only for the API; they are seeded by migrations or by
//! the local store's constructor.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Category, CategoryId};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category ordered by id ascending.
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    /// Fetch a single category, `Ok(None)` if no category has this id.
    async fn get_category(&self, category_id: CategoryId) -> RepositoryResult<Option<Category>>;
}
