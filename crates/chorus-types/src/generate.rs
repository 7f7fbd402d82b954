//! Generation outcome types for downstream text-generation calls.
//!
//! A [`Generation`] is the normalized result of one downstream call: the
//! reply text extracted from whatever shape the provider returned, plus the
//! raw JSON payload for clients that want it. [`GenerateError`] classifies
//! the two ways a call can fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized result of a single downstream generation call.
///
/// `reply` is always present; a response body that could not be parsed at
/// all yields an empty reply with `raw` set to JSON null rather than an
/// error, so provider quirks never break the user-facing flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// Reply text extracted from the provider payload.
    pub reply: String,
    /// The raw provider payload, verbatim. JSON null when unparseable.
    pub raw: Value,
}

/// Errors from downstream generation calls.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The provider answered with a non-success HTTP status.
    #[error("downstream API error: status {status}")]
    Status {
        status: u16,
        /// Raw response body, relayed to the caller untouched.
        body: String,
    },

    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("downstream request failed: {0}")]
    Transport(String),
}
