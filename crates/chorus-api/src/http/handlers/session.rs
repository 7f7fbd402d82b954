//! Session maintenance endpoint.
//!
//! POST /api/clear -- drop a session's conversation history.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the clear endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for the clear endpoint.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub ok: bool,
}

/// POST /api/clear -- delete a session's history.
pub async fn clear(
    State(state): State<AppState>,
    Json(body): Json<ClearRequest>,
) -> Result<Json<ClearResponse>, AppError> {
    let session_id = body
        .session_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Missing sessionId".to_string()))?;

    state.chat_service.clear(&session_id);

    Ok(Json(ClearResponse { ok: true }))
}
