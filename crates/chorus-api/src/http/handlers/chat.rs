//! Chat endpoint.
//!
//! POST /api/chat -- one persona-conditioned exchange against the
//! downstream API, recorded in the session's rolling history window.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::AppError;
use crate::http::handlers::require_message;
use crate::state::AppState;

/// Request body for the chat endpoint.
///
/// `message` stays a loose JSON value so validation owns the 400 for
/// non-string payloads; unknown fields (the client's unused `context`)
/// are accepted and ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
    /// Existing session to continue; a new one is created when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Persona key; unknown keys resolve to the default persona.
    #[serde(default)]
    pub persona: Option<String>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub raw: Value,
    /// Present (and true) only when the reply was synthesized locally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    pub session_id: String,
    pub history_length: usize,
}

/// POST /api/chat -- run one chat exchange.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = require_message(body.message.as_ref())?.to_string();

    let outcome = state
        .chat_service
        .chat(body.session_id, &message, body.persona.as_deref())
        .await?;

    Ok(Json(ChatResponse {
        reply: outcome.reply,
        raw: outcome.raw,
        mock: outcome.mock.then_some(true),
        session_id: outcome.session_id,
        history_length: outcome.history_length,
    }))
}
