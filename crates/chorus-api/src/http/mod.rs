//! HTTP layer for the Chorus proxy.
//!
//! Axum-based JSON API with permissive CORS, request tracing, and
//! optional static file serving for the browser client.

pub mod error;
pub mod handlers;
pub mod router;
