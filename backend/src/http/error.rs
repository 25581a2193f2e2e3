//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::ServiceError;

/// Error response body shared by every failing request.
///
/// Only the status code and its fixed message are exposed; the detail that
/// caused the failure is logged, never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error: u16,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: status.as_u16(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Known path, unsupported verb
    MethodNotAllowed,
    /// Well-formed request that cannot be processed
    Unprocessable(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed public message for the error kind.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "resource not found",
            AppError::MethodNotAllowed => "method not allowed",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::Internal(_) => "internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::NotFound(detail) => tracing::debug!(%detail, "not found"),
            AppError::MethodNotAllowed => tracing::debug!("method not allowed"),
            AppError::Unprocessable(detail) => tracing::warn!(%detail, "unprocessable request"),
            AppError::Internal(detail) => tracing::error!(%detail, "internal error"),
        }

        let body = ErrorBody::new(status, self.public_message());
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            ServiceError::Unprocessable(msg) => AppError::Unprocessable(msg),
            ServiceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_map_to_status() {
        let cases = [
            (ServiceError::not_found("x"), StatusCode::NOT_FOUND),
            (ServiceError::unprocessable("x"), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody::new(StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "unprocessable", "error": 422})
        );
    }

    #[tokio::test]
    async fn test_detail_is_not_exposed() {
        let response = AppError::Internal("password=hunter2".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, ErrorBody::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error"));
        assert!(!String::from_utf8_lossy(&bytes).contains("hunter2"));
    }
}
