//! Gemini downstream provider implementation.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`GenerationProvider`](chorus_core::generate::provider::GenerationProvider)
//! trait for a Gemini-shaped text-generation endpoint, plus the
//! response-shape normalization the proxy relies on.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
