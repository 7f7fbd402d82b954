//! Infrastructure layer for Chorus.
//!
//! Contains the concrete [`GenerationProvider`](chorus_core::generate::provider::GenerationProvider)
//! implementation for the Gemini-shaped downstream API, response-shape
//! normalization, and environment configuration loading.

pub mod config;
pub mod gemini;
