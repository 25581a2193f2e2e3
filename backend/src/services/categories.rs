//! Category directory.
//!
//! Categories are read on every call; nothing is cached between requests.

use std::collections::BTreeMap;

use super::error::ServiceResult;
use crate::db::{CategoryRepository, FullRepository};
use crate::models::{Category, CategoryId};

/// Category id to display name, ordered by id.
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Build the id → type mapping from the current store contents.
pub async fn category_map(repo: &dyn FullRepository) -> ServiceResult<CategoryMap> {
    let categories = repo.list_categories().await?;
    Ok(to_category_map(categories))
}

/// Every category in its public `{id, type}` form, ordered by id.
pub async fn formatted_categories(repo: &dyn FullRepository) -> ServiceResult<Vec<Category>> {
    let mut categories = repo.list_categories().await?;
    categories.sort_by_key(|c| c.id);
    Ok(categories)
}

pub fn to_category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
