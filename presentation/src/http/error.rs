//! HTTP error responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use interview_application::{DailyQuestionError, ReviewProgressError, SubmitAnswerError};
use interview_domain::DomainError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        if e.is_not_found() {
            ApiError::NotFound(e.to_string())
        } else {
            // Malformed questions can only come from the built-in catalog
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<SubmitAnswerError> for ApiError {
    fn from(e: SubmitAnswerError) -> Self {
        match e {
            SubmitAnswerError::Domain(e) => e.into(),
            SubmitAnswerError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DailyQuestionError> for ApiError {
    fn from(e: DailyQuestionError) -> Self {
        match e {
            DailyQuestionError::Domain(e) => e.into(),
            DailyQuestionError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ReviewProgressError> for ApiError {
    fn from(e: ReviewProgressError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
