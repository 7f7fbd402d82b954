//! Application error type mapping to HTTP status codes and JSON bodies.
//!
//! The wire contract is `{error}` for client errors and `{error, details}`
//! for downstream and server failures; downstream errors keep the
//! provider's status code, and `details` carries the raw provider body
//! untouched.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chorus_types::generate::GenerateError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request body (missing/empty/non-string fields).
    Validation(String),
    /// Non-success status from the downstream provider; passed through.
    Downstream { status: u16, details: String },
    /// Transport failure or unexpected internal error.
    Internal(String),
}

impl From<GenerateError> for AppError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::Status { status, body } => AppError::Downstream {
                status,
                details: body,
            },
            GenerateError::Transport(details) => AppError::Internal(details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Downstream { status, details } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "error": "Downstream API error", "details": details }),
            ),
            AppError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server error", "details": details }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
