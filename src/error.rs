//! Error types for the REST API.
//!
//! Errors are reported as an HTTP status with a plain-text reason body.

use crate::db::StoreError;
use crate::linking::LinkError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};


/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Link creation was rejected.
    #[error(transparent)]
    Link(#[from] LinkError),

    /// Request body could not be read as JSON of the expected shape.
    #[error("{0}")]
    InvalidBody(String),

    /// Store read failed on an endpoint that reports it as a bad request.
    #[error("{0}")]
    Store(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Link(_) | ApiError::InvalidBody(_) | ApiError::Store(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
