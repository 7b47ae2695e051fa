//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON bodies. Storage detail is
//! logged and never returned to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// Body text for any rejected create request.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Question and answer are required";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Storage call failed (500).
    /// `message` is the generic text shown to the caller.
    Storage {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    pub fn storage(message: &'static str, source: DbError) -> Self {
        Self::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Validation(e) => {
                tracing::debug!(reason = %e, "Rejected question input");
                REQUIRED_FIELDS_MESSAGE
            }
            Self::Storage { message, source } if source.is_timeout() => {
                tracing::error!(error = %source, timeout = true, "{}", message);
                *message
            }
            Self::Storage { message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", message);
                *message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
