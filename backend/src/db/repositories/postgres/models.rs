use diesel::prelude::*;

use super::schema::{categories, questions};
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: i64,
    pub category_type: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId(row.id),
            kind: row.category_type,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuestionRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: QuestionId(row.id),
            question: row.question,
            answer: row.answer,
            category: CategoryId(row.category),
            difficulty: row.difficulty,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestionRow {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<&NewQuestion> for NewQuestionRow {
    fn from(question: &NewQuestion) -> Self {
        Self {
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category.value(),
            difficulty: question.difficulty,
        }
    }
}
