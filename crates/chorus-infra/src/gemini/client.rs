//! GeminiProvider -- concrete [`GenerationProvider`] implementation.
//!
//! Sends composed prompts to a configured Gemini-shaped generateContent
//! endpoint with `x-goog-api-key` authentication and normalizes whatever
//! shape comes back into a plain reply string.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use chorus_core::generate::provider::GenerationProvider;
use chorus_types::generate::{GenerateError, Generation};

use super::types::{GenerateContentRequest, normalize_reply};

/// Gemini downstream generation provider.
///
/// Implements [`GenerationProvider`] for a generateContent-style endpoint.
/// The full endpoint URL is injected (it encodes the model), which also
/// lets tests point the provider at a local stub server.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    endpoint: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider for the given endpoint.
    pub fn new(api_key: SecretString, endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120)) // generous ceiling for slow generations
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            endpoint,
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// GeminiProvider intentionally does NOT derive Debug; the SecretString
// field keeps the API key out of any accidental formatting.

impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // A body that is not JSON at all degrades to an empty reply rather
        // than a hard failure.
        let raw: Value = match response.json().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "downstream body was not JSON; returning empty reply");
                return Ok(Generation {
                    reply: String::new(),
                    raw: Value::Null,
                });
            }
        };

        let reply = normalize_reply(&raw);
        Ok(Generation { reply, raw })
    }
}
