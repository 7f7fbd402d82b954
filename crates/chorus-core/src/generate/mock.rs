//! Deterministic mock reply used when no downstream API is configured.

/// Synthesize the local placeholder reply for `persona_key` and `message`.
///
/// Deterministic by shape: carries the persona key and the length of the
/// original message, plus a hint on how to enable the live downstream.
pub fn mock_reply(persona_key: &str, message: &str) -> String {
    format!(
        "Mock reply ({persona_key}): I received your message ({} chars). \
         Set GEMINI_API_KEY and GEMINI_ENDPOINT to use the live model.",
        message.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reply_carries_key_and_length() {
        let reply = mock_reply("modi", "Hello");
        assert!(reply.contains("(modi)"));
        assert!(reply.contains("5 chars"));
    }

    #[test]
    fn test_mock_reply_is_deterministic() {
        assert_eq!(mock_reply("default", "Hi"), mock_reply("default", "Hi"));
    }

    #[test]
    fn test_mock_reply_counts_chars_not_bytes() {
        let reply = mock_reply("modi", "नमस्ते");
        assert!(reply.contains("6 chars"));
    }
}
