//! Question creation and deletion.

use super::error::{ServiceError, ServiceResult};
use crate::db::{FullRepository, QuestionRepository};
use crate::models::{Question, QuestionDraft, QuestionId};

/// Validate and persist a new question.
///
/// Every failure, whether a missing field, an unknown category or a store
/// error, is reported as Unprocessable.
pub async fn create_question(
    repo: &dyn FullRepository,
    draft: QuestionDraft,
) -> ServiceResult<Question> {
    let new_question = draft.validate().map_err(|reason| {
        log::warn!("rejected question draft: {}", reason);
        ServiceError::unprocessable(reason)
    })?;

    let stored = repo.insert_question(&new_question).await.map_err(|e| {
        log::warn!("failed to store question: {}", e);
        ServiceError::unprocessable(e.to_string())
    })?;

    log::debug!("created question {}", stored.id);
    Ok(stored)
}

/// Delete a question by id.
///
/// An absent question is Unprocessable. A store failure, during the lookup or
/// the delete itself, is Internal.
pub async fn delete_question(
    repo: &dyn FullRepository,
    question_id: QuestionId,
) -> ServiceResult<QuestionId> {
    let existing = repo.get_question(question_id).await?;
    if existing.is_none() {
        return Err(ServiceError::unprocessable(format!(
            "question {} does not exist",
            question_id
        )));
    }

    repo.delete_question(question_id).await.map_err(|e| {
        log::error!("failed to delete question {}: {}", question_id, e);
        ServiceError::internal(e.to_string())
    })?;

    log::debug!("deleted question {}", question_id);
    Ok(question_id)
}
