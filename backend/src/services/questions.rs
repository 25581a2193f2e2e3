//! Question queries: paginated listing, search, category listing and quiz
//! selection.

use std::collections::HashSet;

use super::categories::{category_map, formatted_categories, CategoryMap};
use super::error::{ServiceError, ServiceResult};
use super::pagination::{page_start, paginate};
use super::random::RandomSource;
use crate::db::{CategoryRepository, FullRepository, QuestionRepository};
use crate::models::{Category, CategoryId, Question, QuestionId};

/// Placeholder reported as the current category of the unfiltered listing.
/// The listing has no real current category; clients only display it.
pub const LISTING_CURRENT_CATEGORY: CategoryId = CategoryId(1);

/// Category whose name is reported as the current category of search results.
pub const SEARCH_CURRENT_CATEGORY: CategoryId = CategoryId(1);

/// Quiz category id meaning "questions from every category".
pub const ALL_CATEGORIES: CategoryId = CategoryId(0);

/// One page of the unfiltered question listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    /// Count of all questions, not just this page.
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: CategoryId,
}

/// One page of search matches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    /// Count of all matches, not just this page.
    pub total_questions: usize,
    pub current_category: String,
}

/// One page of a single category's questions.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
    pub categories: Vec<Category>,
}

/// Outcome of a quiz draw.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizSelection {
    Question(Question),
    /// Every question in scope has already been asked.
    Exhausted,
}

impl QuizSelection {
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizSelection::Question(question) => Some(question),
            QuizSelection::Exhausted => None,
        }
    }
}

/// List every question, one page at a time.
///
/// An out-of-range page yields an empty `questions` list, not an error.
pub async fn list_questions(
    repo: &dyn FullRepository,
    page: i64,
    per_page: usize,
) -> ServiceResult<QuestionListing> {
    let questions = repo.list_questions().await?;
    let categories = category_map(repo).await?;

    Ok(QuestionListing {
        questions: paginate(&questions, page, per_page).to_vec(),
        total_questions: questions.len(),
        categories,
        current_category: LISTING_CURRENT_CATEGORY,
    })
}

/// Case-insensitive substring match. An empty term matches every text.
pub fn matches_search_term(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Search question text for `term` and return one page of matches.
///
/// A missing term behaves like the empty string and matches everything.
pub async fn search_questions(
    repo: &dyn FullRepository,
    term: Option<&str>,
    page: i64,
    per_page: usize,
) -> ServiceResult<SearchResults> {
    let term = term.unwrap_or_default();
    let matches: Vec<Question> = repo
        .list_questions()
        .await?
        .into_iter()
        .filter(|q| matches_search_term(&q.question, term))
        .collect();
    log::debug!("search {:?} matched {} questions", term, matches.len());

    let current_category = repo
        .get_category(SEARCH_CURRENT_CATEGORY)
        .await?
        .ok_or_else(|| {
            ServiceError::not_found(format!("category {} does not exist", SEARCH_CURRENT_CATEGORY))
        })?;

    Ok(SearchResults {
        questions: paginate(&matches, page, per_page).to_vec(),
        total_questions: matches.len(),
        current_category: current_category.kind,
    })
}

/// List one page of the questions in `category_id`.
///
/// Fails with NotFound when the category does not exist or when the page
/// starts beyond the last matching question.
pub async fn questions_by_category(
    repo: &dyn FullRepository,
    category_id: CategoryId,
    page: i64,
    per_page: usize,
) -> ServiceResult<CategoryQuestions> {
    let current_category = repo
        .get_category(category_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(format!("category {} does not exist", category_id)))?;

    let categories = formatted_categories(repo).await?;
    let questions = repo.list_questions_by_category(category_id).await?;

    let past_end = match page_start(page, per_page) {
        Some(start) => start > questions.len(),
        // Offset overflow: the page lies past any possible result
        None => page >= 1,
    };
    if past_end {
        return Err(ServiceError::not_found(format!(
            "page {} is out of range for category {} ({} questions)",
            page,
            category_id,
            questions.len()
        )));
    }

    Ok(CategoryQuestions {
        questions: paginate(&questions, page, per_page).to_vec(),
        total_questions: questions.len(),
        current_category,
        categories,
    })
}

/// Draw a random question the player has not seen yet.
///
/// `quiz_category` of [`ALL_CATEGORIES`] draws from every question. Any other
/// id draws from that category and fails with NotFound if the category has no
/// questions at all. When every candidate is in `previous`, the quiz is over
/// and [`QuizSelection::Exhausted`] is returned.
pub async fn select_quiz_question(
    repo: &dyn FullRepository,
    random: &dyn RandomSource,
    previous: &HashSet<QuestionId>,
    quiz_category: CategoryId,
) -> ServiceResult<QuizSelection> {
    let pool = if quiz_category == ALL_CATEGORIES {
        repo.list_questions().await?
    } else {
        let pool = repo.list_questions_by_category(quiz_category).await?;
        if pool.is_empty() {
            return Err(ServiceError::not_found(format!(
                "category {} has no questions",
                quiz_category
            )));
        }
        pool
    };

    let mut eligible: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        log::debug!("quiz exhausted for category {}", quiz_category);
        return Ok(QuizSelection::Exhausted);
    }

    let index = random.pick_index(eligible.len());
    if index >= eligible.len() {
        return Err(ServiceError::internal(format!(
            "random source returned index {} for {} candidates",
            index,
            eligible.len()
        )));
    }
    Ok(QuizSelection::Question(eligible.swap_remove(index)))
}
