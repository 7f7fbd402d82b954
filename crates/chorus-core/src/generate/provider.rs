//! GenerationProvider trait definition.
//!
//! The single abstraction between the orchestration layer and the
//! downstream text-generation API. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition); implementations live in `chorus-infra`.

use chorus_types::generate::{GenerateError, Generation};

/// Trait for downstream generation backends.
///
/// One composed prompt in, one normalized [`Generation`] out. The provider
/// owns HTTP transport, authentication, and response-shape normalization;
/// it does NOT own the mock-when-unconfigured policy -- that decision
/// belongs to the chat service.
pub trait GenerationProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a composed prompt downstream and return the normalized reply.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<Generation, GenerateError>> + Send;
}
