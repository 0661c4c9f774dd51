//! Application error type mapping to HTTP status codes.
//!
//! Every error body is `{ "error": "<message>" }`. Storage and translation
//! failures are logged here and answered with a generic message.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chatterbox_types::error::{ChatError, RepositoryError, TranslationError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed body or invalid field.
    Validation(String),
    /// Translation gateway failure.
    Translation(TranslationError),
    /// Response store failure.
    Storage(RepositoryError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Validation(msg) => AppError::Validation(msg),
            ChatError::Translation(e) => AppError::Translation(e),
            ChatError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Translation(e) => {
                tracing::warn!(error = %e, "Translation failed");
                (StatusCode::BAD_GATEWAY, "Translation error".to_string())
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Response store failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
