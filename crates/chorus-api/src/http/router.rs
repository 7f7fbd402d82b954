//! Axum router configuration with middleware.
//!
//! JSON API routes plus a health check. Middleware: permissive CORS and
//! request tracing. When the configured web directory exists, static
//! files for the browser client are served from it; API routes take
//! priority and unknown paths fall through to the static service.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.web_dir.clone();

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/compare", post(handlers::compare::compare))
        .route("/api/clear", post(handlers::session::clear))
        .route("/healthz", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.exists() {
        router = router.fallback_service(ServeDir::new(&web_dir));
        tracing::info!(path = %web_dir.display(), "static file serving enabled");
    }

    router
}

/// GET /healthz - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
