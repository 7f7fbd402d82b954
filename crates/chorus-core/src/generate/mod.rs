//! Downstream generation port and the local mock fallback.
//!
//! [`provider::GenerationProvider`] is the trait the infrastructure layer
//! implements for the real downstream API; [`mock`] synthesizes the
//! deterministic placeholder reply used when no downstream is configured.

pub mod mock;
pub mod provider;

pub use provider::GenerationProvider;
