use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Body returned for a POST that fails validation.
pub const INVALID_ANIMAL_MESSAGE: &str = "The animal is not properly formatted.";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Rejected client input; answered with a plain-text body.
    #[error("{0}")]
    BadRequest(String),

    /// No animal with the requested id; answered with an empty body.
    #[error("Not found")]
    NotFound,

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] zookeepr::StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    pub fn invalid_animal() -> Self {
        ServerError::BadRequest(INVALID_ANIMAL_MESSAGE.to_string())
    }

    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound | ServerError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Store(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::NotFound | ServerError::RouteNotFound(_) => "NOT_FOUND",
            ServerError::Store(_) => "STORE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ServerError::BadRequest(message) => (status, message).into_response(),
            ServerError::NotFound => status.into_response(),
            other => {
                if status.is_server_error() {
                    tracing::error!(error = %other, "request failed");
                }
                let body = ErrorResponse {
                    error: ErrorDetail {
                        code: other.error_code().to_string(),
                        message: other.to_string(),
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("Worker task failed: {err}"))
    }
}
