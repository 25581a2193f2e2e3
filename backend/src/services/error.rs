//! Errors returned by the service layer.
//!
//! Each variant corresponds to one response status at the HTTP boundary. The
//! message is for logs only and is never sent to clients.

use crate::db::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Missing category, empty quiz pool, or a page past the end of a
    /// category listing.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rejected create, delete of an absent question, malformed input.
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// Store failure that the caller cannot fix.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Plain read failures are internal errors. Operations with their own
/// contract (create, delete) map repository errors explicitly.
impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
