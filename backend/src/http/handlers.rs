//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use std::collections::HashSet;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest, CreateQuestionResponse,
    DeleteQuestionResponse, HealthResponse, PageQuery, QuestionListResponse, QuizRequest,
    QuizResponse, SearchRequest, SearchResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::QuestionRepository;
use crate::models::{CategoryId, QuestionId};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Page number from an optional query string. Unparsable query strings are
/// treated like a missing one.
fn page_number(query: Result<Query<PageQuery>, QueryRejection>) -> i64 {
    query.map(|Query(q)| q).unwrap_or_default().page()
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::Unprocessable(rejection.body_text()))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the service is up and the store is reachable. Always 200.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
        database,
    })
}

// =============================================================================
// Categories
// =============================================================================

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> HandlerResult<CategoriesResponse> {
    let categories = services::category_map(state.repository.as_ref()).await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{category_id}/questions?page=N
///
/// A non-numeric category id cannot name a category and is reported as 404.
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> HandlerResult<CategoryQuestionsResponse> {
    let category_id: i64 = category_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("invalid category id {:?}", category_id)))?;

    let page = services::questions_by_category(
        state.repository.as_ref(),
        CategoryId(category_id),
        page_number(query),
        state.questions_per_page,
    )
    .await?;

    Ok(Json(page.into()))
}

// =============================================================================
// Questions
// =============================================================================

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> HandlerResult<QuestionListResponse> {
    let listing = services::list_questions(
        state.repository.as_ref(),
        page_number(query),
        state.questions_per_page,
    )
    .await?;

    Ok(Json(listing.into()))
}

/// POST /questions
///
/// Malformed JSON, missing fields and store failures are all 422.
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> HandlerResult<CreateQuestionResponse> {
    let draft = json_body(body)?;
    services::create_question(state.repository.as_ref(), draft).await?;
    Ok(Json(CreateQuestionResponse { success: true }))
}

/// DELETE /questions/{question_id}
///
/// The response echoes the parsed id as a number.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> HandlerResult<DeleteQuestionResponse> {
    let question_id: i64 = question_id
        .parse()
        .map_err(|_| AppError::Unprocessable(format!("invalid question id {:?}", question_id)))?;

    let deleted =
        services::delete_question(state.repository.as_ref(), QuestionId(question_id)).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        question_id: deleted.value(),
    }))
}

/// POST /question?page=N
///
/// Search by `searchTerm`; a missing term matches every question.
pub async fn search_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> HandlerResult<SearchResponse> {
    let request = json_body(body)?;
    let results = services::search_questions(
        state.repository.as_ref(),
        request.search_term.as_deref(),
        page_number(query),
        state.questions_per_page,
    )
    .await?;

    Ok(Json(results.into()))
}

// =============================================================================
// Quiz
// =============================================================================

/// POST /quizzes
///
/// `quiz_category` is required; `previous_questions` defaults to empty.
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> HandlerResult<QuizResponse> {
    let request = json_body(body)?;
    let quiz_category = request
        .quiz_category
        .ok_or_else(|| AppError::Unprocessable("missing field: quiz_category".to_string()))?;

    let previous: HashSet<QuestionId> = request
        .previous_questions
        .unwrap_or_default()
        .into_iter()
        .map(QuestionId)
        .collect();

    let selection = services::select_quiz_question(
        state.repository.as_ref(),
        state.random.as_ref(),
        &previous,
        CategoryId(quiz_category.id),
    )
    .await?;

    Ok(Json(selection.into()))
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Any path without a route.
pub async fn not_found() -> AppError {
    AppError::NotFound("no route".to_string())
}

/// A routed path requested with an unsupported verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
