//! Persona types for Chorus.
//!
//! A persona is a fixed instruction string that conditions downstream
//! generation on a stylistic identity. Personas are identified by an opaque
//! string key and are immutable after registry construction.

use serde::{Deserialize, Serialize};

/// A persona: a key plus the instruction text sent ahead of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub key: String,
    pub instruction: String,
}

impl Persona {
    pub fn new(key: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            instruction: instruction.into(),
        }
    }
}
