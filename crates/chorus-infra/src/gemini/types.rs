//! Gemini generateContent API types and reply normalization.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the downstream endpoint. They are NOT the generic
//! types from chorus-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the Gemini generateContent API.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a single composed prompt in the contents/parts envelope.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One content block in a Gemini request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One text part in a Gemini content block.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Response decoding
//
// Provider payloads vary; the decoder tries shapes in order rather than
// trusting any one of them: the nested candidates shape, then a bare JSON
// string, then the whole payload serialized verbatim.
// ---------------------------------------------------------------------------

/// The nested candidates shape of a Gemini generateContent response.
///
/// Every level is optional so a partially matching payload falls through
/// to the next decoding strategy instead of erroring.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Extract the reply text from a raw downstream payload.
///
/// Decoding order:
/// 1. `candidates[0].content.parts[0].text` when the full chain is present
///    (a missing `text` field on an otherwise well-formed first part yields
///    the empty string);
/// 2. a bare JSON string payload is the reply itself;
/// 3. anything else is serialized verbatim so nothing is silently lost.
pub fn normalize_reply(raw: &Value) -> String {
    if let Ok(response) = serde_json::from_value::<GenerateContentResponse>(raw.clone()) {
        if let Some(part) = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
        {
            return part.text.clone().unwrap_or_default();
        }
    }

    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest::from_prompt("Hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
    }

    #[test]
    fn test_normalize_candidates_shape() {
        let raw = json!({
            "candidates": [{
                "content": {"parts": [{"text": "Namaste, mitron!"}]}
            }]
        });
        assert_eq!(normalize_reply(&raw), "Namaste, mitron!");
    }

    #[test]
    fn test_normalize_first_candidate_wins() {
        let raw = json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        });
        assert_eq!(normalize_reply(&raw), "first");
    }

    #[test]
    fn test_normalize_missing_text_field_is_empty() {
        let raw = json!({
            "candidates": [{"content": {"parts": [{"inlineData": "..."}]}}]
        });
        assert_eq!(normalize_reply(&raw), "");
    }

    #[test]
    fn test_normalize_string_payload() {
        let raw = json!("plain reply");
        assert_eq!(normalize_reply(&raw), "plain reply");
    }

    #[test]
    fn test_normalize_empty_candidates_stringifies() {
        let raw = json!({"candidates": []});
        assert_eq!(normalize_reply(&raw), r#"{"candidates":[]}"#);
    }

    #[test]
    fn test_normalize_unexpected_payload_stringifies() {
        let raw = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        let reply = normalize_reply(&raw);
        assert!(reply.contains("promptFeedback"));
        assert!(reply.contains("SAFETY"));
    }

    #[test]
    fn test_normalize_candidate_without_content_stringifies() {
        let raw = json!({"candidates": [{"finishReason": "STOP"}]});
        let reply = normalize_reply(&raw);
        assert!(reply.contains("finishReason"));
    }
}
