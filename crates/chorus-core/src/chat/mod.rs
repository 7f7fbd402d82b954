//! Chat and compare orchestration.
//!
//! [`service::ChatService`] wires the session store, persona registry,
//! prompt composer, and generation provider into the two operations the
//! proxy exposes: a single-persona chat exchange that mutates session
//! history, and a multi-persona comparison that never does.

pub mod outcome;
pub mod service;

pub use outcome::{ChatOutcome, CompareEntry, CompareOutcome};
pub use service::ChatService;
