//! Persona comparison endpoint.
//!
//! POST /api/compare -- fan one message out across several personas
//! against the same downstream API and aggregate per-persona outcomes,
//! without mutating the shared session history.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use chorus_core::chat::outcome::CompareEntry;

use crate::http::error::AppError;
use crate::http::handlers::require_message;
use crate::state::AppState;

/// Request body for the compare endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub message: Option<Value>,
    /// Session whose history conditions every persona's prompt; never
    /// mutated by this endpoint.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Persona keys to run, in order; defaults to the built-in persona
    /// when empty or absent.
    #[serde(default)]
    pub personas: Option<Vec<String>>,
}

/// Response body for the compare endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub results: BTreeMap<String, CompareEntry>,
    pub session_id: String,
}

/// POST /api/compare -- run one message against several personas.
pub async fn compare(
    State(state): State<AppState>,
    Json(body): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let message = require_message(body.message.as_ref())?.to_string();
    let personas = body.personas.unwrap_or_default();

    let outcome = state
        .chat_service
        .compare(body.session_id, &message, &personas)
        .await;

    Ok(Json(CompareResponse {
        results: outcome.results,
        session_id: outcome.session_id,
    }))
}
