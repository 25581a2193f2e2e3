//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository traits. They
//! hold no state of their own: every call reads the store afresh and maps
//! store failures to the [`ServiceError`] kind each operation promises.

pub mod categories;
pub mod error;
pub mod mutations;
pub mod pagination;
pub mod questions;
pub mod random;


pub use categories::{category_map, formatted_categories, CategoryMap};
pub use error::{ServiceError, ServiceResult};
pub use mutations::{create_question, delete_question};
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use questions::{
    list_questions, questions_by_category, search_questions, select_quiz_question,
    CategoryQuestions, QuestionListing, QuizSelection, SearchResults, ALL_CATEGORIES,
};
pub use random::{RandomSource, ThreadRandom};
