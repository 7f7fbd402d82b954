//! HTTP request handlers for the proxy API.

pub mod chat;
pub mod compare;
pub mod session;

use serde_json::Value;

use crate::http::error::AppError;

/// Extract the required `message` string from a request body.
///
/// Missing, empty, and non-string values are all client errors; callers
/// run this before touching any session state, so a rejected request never
/// mutates history.
pub(crate) fn require_message(value: Option<&Value>) -> Result<&str, AppError> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::Validation("Missing `message` string in request body".to_string())
        })
}
