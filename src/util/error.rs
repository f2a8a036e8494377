use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::repository::repository_error::RepositoryError;

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    Validation,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error envelope returned to clients. Validation problems keep their
/// description in `message`, store failures stay opaque.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl HandlerError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        HandlerError {
            error: HandlerErrorKind::Validation,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        HandlerError {
            error: HandlerErrorKind::Internal,
            message: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

// Store failures reach the client as an opaque 500, the full error text
// stays in the repository and service logs
impl From<RepositoryError> for HandlerError {
    fn from(_err: RepositoryError) -> Self {
        HandlerError {
            error: HandlerErrorKind::Internal,
            message: "Internal server error".to_string(),
            details: None,
        }
    }
}
