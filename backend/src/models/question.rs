//! Question entity and the unvalidated draft submitted by clients.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryId;
use super::int_or_string;

/// Question identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct QuestionId(pub i64);

impl QuestionId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored trivia question.
///
/// The serialized form is the public projection returned by every endpoint:
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// A validated question ready to be persisted. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Question fields as submitted by a client. Every member is optional so
/// that a missing field is reported by [`QuestionDraft::validate`] rather
/// than by the JSON decoder. `difficulty` and `category` accept a number or
/// a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "int_or_string::deserialize_option")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "int_or_string::deserialize_option")]
    pub category: Option<i64>,
}

impl QuestionDraft {
    /// Check that every field is present and that text fields are non-empty.
    pub fn validate(self) -> Result<NewQuestion, String> {
        let question = required_text("question", self.question)?;
        let answer = required_text("answer", self.answer)?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| "missing field: difficulty".to_string())?;
        let category = self
            .category
            .ok_or_else(|| "missing field: category".to_string())?;

        Ok(NewQuestion {
            question,
            answer,
            category: CategoryId(category),
            difficulty,
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(format!("field must not be empty: {}", field)),
        None => Err(format!("missing field: {}", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> QuestionDraft {
        QuestionDraft {
            question: Some("Who painted the Mona Lisa?".to_string()),
            answer: Some("Leonardo da Vinci".to_string()),
            difficulty: Some(2),
            category: Some(2),
        }
    }

    #[test]
    fn test_validate_complete_draft() {
        let new_question = full_draft().validate().unwrap();
        assert_eq!(new_question.category, CategoryId(2));
        assert_eq!(new_question.difficulty, 2);
        assert_eq!(new_question.answer, "Leonardo da Vinci");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let draft = QuestionDraft {
            difficulty: None,
            ..full_draft()
        };
        assert_eq!(draft.validate().unwrap_err(), "missing field: difficulty");

        let draft = QuestionDraft {
            category: None,
            ..full_draft()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_text() {
        let draft = QuestionDraft {
            answer: Some("   ".to_string()),
            ..full_draft()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            "field must not be empty: answer"
        );
    }

    #[test]
    fn test_draft_accepts_partial_json() {
        let draft: QuestionDraft = serde_json::from_str(r#"{"question": "Q?"}"#).unwrap();
        assert_eq!(draft.question.as_deref(), Some("Q?"));
        assert!(draft.answer.is_none());
    }

    #[test]
    fn test_draft_accepts_numeric_strings() {
        let draft: QuestionDraft = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "difficulty": "2", "category": "1"}"#,
        )
        .unwrap();
        assert_eq!(draft.difficulty, Some(2));
        assert_eq!(draft.category, Some(1));
        assert_eq!(draft.validate().unwrap().category, CategoryId(1));
    }

    #[test]
    fn test_draft_rejects_non_numeric_category() {
        let result: Result<QuestionDraft, _> =
            serde_json::from_str(r#"{"question": "Q?", "category": "science"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_question_wire_projection() {
        let question = Question {
            id: QuestionId(7),
            question: "Q".to_string(),
            answer: "A".to_string(),
            category: CategoryId(1),
            difficulty: 3,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "question": "Q",
                "answer": "A",
                "category": 1,
                "difficulty": 3
            })
        );
    }
}
