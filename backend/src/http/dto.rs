//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies use `Option` members so that absent fields are detected
//! by the handlers instead of failing JSON decoding. Every response carries
//! a `success` flag.

use serde::{Deserialize, Serialize};

use crate::models::{Category, CategoryId, Question};
use crate::services::{
    CategoryMap, CategoryQuestions, QuestionListing, QuizSelection, SearchResults,
};

/// Body of `POST /questions`.
pub use crate::models::QuestionDraft as CreateQuestionRequest;

/// `?page=N` query string.
///
/// Kept as raw text so that a non-numeric value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    /// 1-based page number; missing or unparsable values mean page 1.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Body of `POST /question`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Category selector inside a quiz request. Extra members such as `type`
/// are accepted and ignored. `id` may be a number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "crate::models::int_or_string::deserialize")]
    pub id: i64,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Response for `GET /categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Response for `GET /questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: CategoryId,
}

impl From<QuestionListing> for QuestionListResponse {
    fn from(listing: QuestionListing) -> Self {
        Self {
            success: true,
            questions: listing.questions,
            total_questions: listing.total_questions,
            categories: listing.categories,
            current_category: listing.current_category,
        }
    }
}

/// Response for `POST /question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            success: true,
            questions: results.questions,
            total_questions: results.total_questions,
            current_category: results.current_category,
        }
    }
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
    pub categories: Vec<Category>,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(page: CategoryQuestions) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category: page.current_category,
            categories: page.categories,
        }
    }
}

/// Response for `POST /questions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub question_id: i64,
}

/// Response for `POST /quizzes`. `question` is omitted once the quiz is over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

impl From<QuizSelection> for QuizResponse {
    fn from(selection: QuizSelection) -> Self {
        Self {
            success: true,
            question: selection.into_question(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    /// Status of the service
    pub status: String,
    /// Database connection status
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(raw: Option<&str>) -> i64 {
        PageQuery {
            page: raw.map(str::to_string),
        }
        .page()
    }

    #[test]
    fn test_page_query_is_lenient() {
        assert_eq!(page_of(None), 1);
        assert_eq!(page_of(Some("3")), 3);
        assert_eq!(page_of(Some("abc")), 1);
        assert_eq!(page_of(Some("")), 1);
        assert_eq!(page_of(Some("-2")), -2);
    }

    #[test]
    fn test_quiz_request_tolerates_extra_category_fields() {
        let request: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [4, 9], "quiz_category": {"id": 2, "type": "Art"}}"#,
        )
        .unwrap();
        assert_eq!(request.previous_questions, Some(vec![4, 9]));
        assert_eq!(request.quiz_category.map(|c| c.id), Some(2));
    }

    #[test]
    fn test_quiz_category_id_may_be_a_string() {
        let request: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"type": "Science", "id": "1"}}"#,
        )
        .unwrap();
        assert_eq!(request.quiz_category.map(|c| c.id), Some(1));

        let bad: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"type": "Science", "id": "first"}}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_quiz_response_omits_question_when_exhausted() {
        let json = serde_json::to_value(QuizResponse::from(QuizSelection::Exhausted)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_search_request_uses_camel_case_key() {
        let request: SearchRequest = serde_json::from_str(r#"{"searchTerm": "Tom"}"#).unwrap();
        assert_eq!(request.search_term.as_deref(), Some("Tom"));
    }
}
