//! Mapping from service errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::account::domain::AuthResponse;
use crate::account::services::AccountError;
use crate::board::{domain::TaskDomainError, ports::TaskRepositoryError};

/// Errors surfaced by the HTTP handlers.
///
/// Auth failures are rendered as a JSON [`AuthResponse`] envelope so clients
/// can show the message; every other failure is plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was rejected by validation.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),
    /// An auth or profile request was refused.
    #[error("{message}")]
    Rejected {
        /// Status to answer with.
        status: StatusCode,
        /// User-facing message.
        message: String,
    },
    /// Storage failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn rejected(status: StatusCode, err: &AccountError) -> Self {
        Self::Rejected {
            status,
            message: err.to_string(),
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(format!("task {id}")),
            TaskRepositoryError::DuplicateTask(id) => Self::Conflict(format!("task {id}")),
            TaskRepositoryError::Persistence(source) => Self::Internal(source.to_string()),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidCredentials => Self::rejected(StatusCode::UNAUTHORIZED, &err),
            AccountError::EmailTaken => Self::rejected(StatusCode::CONFLICT, &err),
            AccountError::UserNotFound(_) => Self::rejected(StatusCode::NOT_FOUND, &err),
            AccountError::Domain(_) => Self::rejected(StatusCode::BAD_REQUEST, &err),
            AccountError::Repository(source) => Self::Internal(source.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Rejected { status, message } => {
                return (status, Json(AuthResponse::rejected(message))).into_response();
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Conflict(message) => (StatusCode::CONFLICT, message),
            Self::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, message).into_response()
    }
}
