//! Result types for the chat and compare operations.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Result of a single chat exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    /// Normalized reply text (live or mock).
    pub reply: String,
    /// Raw downstream payload; JSON null in mock mode or when unparseable.
    pub raw: Value,
    /// Whether the reply was synthesized locally instead of calling out.
    pub mock: bool,
    /// The session the exchange was recorded under (generated when the
    /// caller supplied none).
    pub session_id: String,
    /// Stored turn count after the exchange, cap applied.
    pub history_length: usize,
}

/// Per-persona slot in a compare result.
///
/// Each persona gets exactly one independent outcome; a failure in one
/// slot never affects the others. Serializes untagged so the wire shape is
/// `{reply, raw}` or `{error, details}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CompareEntry {
    Reply {
        reply: String,
        raw: Value,
    },
    Failure {
        error: String,
        details: String,
    },
}

impl CompareEntry {
    /// Whether this slot holds a reply rather than a failure.
    pub fn is_reply(&self) -> bool {
        matches!(self, CompareEntry::Reply { .. })
    }
}

/// Result of a compare operation: one slot per persona key, keyed by the
/// key exactly as the caller gave it.
#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    pub results: BTreeMap<String, CompareEntry>,
    pub session_id: String,
}
