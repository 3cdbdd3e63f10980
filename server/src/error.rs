use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use tripsync_store::StoreError;

/// Error type for the HTTP API. Every variant renders as
/// `{"error": message}` with the matching status code.
#[derive(Debug)]
pub enum ApiError {
    /// No bearer token on a protected route.
    MissingToken,
    /// Bearer token present but failed verification.
    InvalidToken,
    /// Login credential mismatch. The message does not distinguish an
    /// unknown email from a wrong password.
    InvalidCredentials,
    BadRequest(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Access token required".to_string(),
            ),
            Self::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials".to_string(),
            ),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Internal(e) => {
                error!(error = %e, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(message) => Self::NotFound(message),
            StoreError::Conflict(message) => Self::BadRequest(message),
            StoreError::Storage(message) => Self::Internal(anyhow::anyhow!(message)),
        }
    }
}
