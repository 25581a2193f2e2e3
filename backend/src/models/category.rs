//! Category entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category, e.g. "Science" or "History".
///
/// Serializes to the wire projection `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            kind: kind.into(),
        }
    }
}

/// Categories the application ships with, in id order.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_kind_as_type() {
        let json = serde_json::to_value(Category::new(3, "Geography")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "type": "Geography"}));
    }

    #[test]
    fn test_default_categories_are_id_ordered() {
        let ids: Vec<i64> = DEFAULT_CATEGORIES.iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
