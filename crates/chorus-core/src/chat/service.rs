//! Chat service orchestrating sessions, personas, and the downstream call.
//!
//! ChatService coordinates the SessionStore, PersonaRegistry, prompt
//! composer, and GenerationProvider for the two proxy operations. It is
//! generic over the provider to maintain clean architecture (chorus-core
//! never depends on chorus-infra); when no provider is configured it
//! substitutes the deterministic mock reply instead of calling out.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use chorus_types::chat::Turn;
use chorus_types::generate::GenerateError;

use crate::chat::outcome::{ChatOutcome, CompareEntry, CompareOutcome};
use crate::generate::mock::mock_reply;
use crate::generate::provider::GenerationProvider;
use crate::persona::registry::{DEFAULT_COMPARE_PERSONA, PersonaRegistry};
use crate::prompt;
use crate::session::store::SessionStore;

/// Orchestrates chat exchanges and persona comparisons.
pub struct ChatService<P: GenerationProvider> {
    sessions: Arc<SessionStore>,
    personas: Arc<PersonaRegistry>,
    /// Downstream provider; `None` means mock mode (no credential or
    /// endpoint configured).
    provider: Option<Arc<P>>,
}

impl<P: GenerationProvider> ChatService<P> {
    /// Create a new chat service with the given collaborators.
    pub fn new(
        sessions: Arc<SessionStore>,
        personas: Arc<PersonaRegistry>,
        provider: Option<Arc<P>>,
    ) -> Self {
        Self {
            sessions,
            personas,
            provider,
        }
    }

    /// Access the session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Access the persona registry.
    pub fn personas(&self) -> &PersonaRegistry {
        &self.personas
    }

    /// Whether replies are synthesized locally instead of calling out.
    pub fn is_mock(&self) -> bool {
        self.provider.is_none()
    }

    /// Run one chat exchange: record the user turn, compose a prompt from
    /// the current window, generate a reply, record the assistant turn.
    ///
    /// A missing `session_id` gets a server-generated one, returned in the
    /// outcome. On a downstream error the user turn remains recorded and
    /// no assistant turn is appended, so the partial exchange stays
    /// visible in the history length.
    pub async fn chat(
        &self,
        session_id: Option<String>,
        message: &str,
        persona: Option<&str>,
    ) -> Result<ChatOutcome, GenerateError> {
        let session_id = session_id.unwrap_or_else(new_session_id);
        let persona_key = self.personas.canonical_key(persona);
        let instruction = self.personas.resolve(persona);

        self.sessions.append(&session_id, Turn::user(message));
        let history = self.sessions.get_or_create(&session_id);
        let composed = prompt::compose(instruction, &history);
        debug!(
            session_id = %session_id,
            persona = persona_key,
            turns = history.len(),
            "composed chat prompt"
        );

        match &self.provider {
            Some(provider) => {
                let generation = provider.generate(&composed).await.inspect_err(|e| {
                    warn!(session_id = %session_id, error = %e, "downstream call failed");
                })?;
                let history_length = self
                    .sessions
                    .append(&session_id, Turn::assistant(&generation.reply));

                Ok(ChatOutcome {
                    reply: generation.reply,
                    raw: generation.raw,
                    mock: false,
                    session_id,
                    history_length,
                })
            }
            None => {
                let reply = mock_reply(persona_key, message);
                let history_length = self.sessions.append(&session_id, Turn::assistant(&reply));

                Ok(ChatOutcome {
                    reply,
                    raw: Value::Null,
                    mock: true,
                    session_id,
                    history_length,
                })
            }
        }
    }

    /// Run one message against several personas and collect per-persona
    /// outcomes, without touching the stored session.
    ///
    /// Each key in `personas` is executed independently and in order
    /// against a private copy of the history extended with `message`;
    /// unknown keys run with the default persona's instruction but stay
    /// keyed by the original key. A failure in one slot never aborts the
    /// rest. An empty list defaults to the built-in compare persona.
    pub async fn compare(
        &self,
        session_id: Option<String>,
        message: &str,
        personas: &[String],
    ) -> CompareOutcome {
        let session_id = session_id.unwrap_or_else(new_session_id);
        let history = self.sessions.history(&session_id);

        let keys: Vec<&str> = if personas.is_empty() {
            vec![DEFAULT_COMPARE_PERSONA]
        } else {
            personas.iter().map(String::as_str).collect()
        };

        let mut results = std::collections::BTreeMap::new();
        for key in keys {
            let instruction = self.personas.resolve(Some(key));

            let mut transcript = history.clone();
            transcript.push(Turn::user(message));
            let composed = prompt::compose(instruction, &transcript);

            let entry = match &self.provider {
                Some(provider) => match provider.generate(&composed).await {
                    Ok(generation) => CompareEntry::Reply {
                        reply: generation.reply,
                        raw: generation.raw,
                    },
                    Err(GenerateError::Status { status, body }) => {
                        warn!(persona = key, status, "compare persona failed downstream");
                        CompareEntry::Failure {
                            error: format!("Downstream error: {status}"),
                            details: body,
                        }
                    }
                    Err(GenerateError::Transport(details)) => {
                        warn!(persona = key, "compare persona request failed");
                        CompareEntry::Failure {
                            error: "Request failed".to_string(),
                            details,
                        }
                    }
                },
                None => CompareEntry::Reply {
                    reply: mock_reply(key, message),
                    raw: Value::Null,
                },
            };

            results.insert(key.to_string(), entry);
        }

        CompareOutcome {
            results,
            session_id,
        }
    }

    /// Delete a session's history. Returns whether an entry existed.
    pub fn clear(&self, session_id: &str) -> bool {
        self.sessions.delete(session_id)
    }
}

/// Server-generated session id: a time-sortable UUID v7 string.
fn new_session_id() -> String {
    Uuid::now_v7().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chorus_types::chat::Role;
    use chorus_types::generate::Generation;

    /// Scripted provider returning queued results in order.
    struct StubProvider {
        script: Mutex<Vec<Result<Generation, GenerateError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn new(script: Vec<Result<Generation, GenerateError>>) -> Self {
            Self {
                script: Mutex::new(script),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn reply(text: &str) -> Result<Generation, GenerateError> {
            Ok(Generation {
                reply: text.to_string(),
                raw: serde_json::json!({"echo": text}),
            })
        }

        fn seen_prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl GenerationProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.script.lock().unwrap().remove(0)
        }
    }

    fn service_with(
        script: Vec<Result<Generation, GenerateError>>,
    ) -> (ChatService<StubProvider>, Arc<StubProvider>) {
        let provider = Arc::new(StubProvider::new(script));
        let service = ChatService::new(
            Arc::new(SessionStore::default()),
            Arc::new(PersonaRegistry::builtin()),
            Some(provider.clone()),
        );
        (service, provider)
    }

    fn mock_service() -> ChatService<StubProvider> {
        ChatService::new(
            Arc::new(SessionStore::default()),
            Arc::new(PersonaRegistry::builtin()),
            None,
        )
    }

    #[tokio::test]
    async fn test_chat_appends_user_and_assistant_turns() {
        let (service, _) = service_with(vec![StubProvider::reply("namaste")]);

        let outcome = service.chat(None, "Hello", Some("modi")).await.unwrap();

        assert_eq!(outcome.reply, "namaste");
        assert_eq!(outcome.history_length, 2);
        assert!(!outcome.mock);

        let turns = service.sessions().history(&outcome.session_id);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "Hello");
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "namaste");
    }

    #[tokio::test]
    async fn test_chat_generates_session_id_when_absent() {
        let (service, _) = service_with(vec![StubProvider::reply("hi")]);
        let outcome = service.chat(None, "Hello", None).await.unwrap();
        assert!(!outcome.session_id.is_empty());
        assert!(service.sessions().contains(&outcome.session_id));
    }

    #[tokio::test]
    async fn test_chat_prompt_includes_persona_and_history() {
        let (service, provider) = service_with(vec![
            StubProvider::reply("first"),
            StubProvider::reply("second"),
        ]);

        let outcome = service
            .chat(Some("s1".to_string()), "One", Some("modi"))
            .await
            .unwrap();
        service
            .chat(Some(outcome.session_id), "Two", Some("modi"))
            .await
            .unwrap();

        let prompts = provider.seen_prompts();
        assert!(prompts[0].contains("Narendra Modi"));
        assert!(prompts[0].ends_with("User: One\nAssistant:"));
        // The second prompt resends the whole window, answered turns included.
        assert!(prompts[1].contains("User: One\nAssistant: first\nUser: Two"));
    }

    #[tokio::test]
    async fn test_chat_downstream_error_keeps_user_turn() {
        let (service, _) = service_with(vec![Err(GenerateError::Status {
            status: 500,
            body: "boom".to_string(),
        })]);

        let err = service
            .chat(Some("s1".to_string()), "Hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::Status { status: 500, .. }));

        let turns = service.sessions().history("s1");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
    }

    #[tokio::test]
    async fn test_chat_history_capped_at_max_turns() {
        let script = (0..20).map(|i| StubProvider::reply(&format!("r{i}"))).collect();
        let (service, _) = service_with(script);

        let mut last = 0;
        for i in 0..20 {
            let outcome = service
                .chat(Some("s1".to_string()), &format!("m{i}"), None)
                .await
                .unwrap();
            last = outcome.history_length;
        }
        assert_eq!(last, service.sessions().max_turns());
    }

    #[tokio::test]
    async fn test_mock_chat_is_deterministic_and_flagged() {
        let service = mock_service();

        let outcome = service.chat(None, "Hello", Some("modi")).await.unwrap();
        assert!(outcome.mock);
        assert!(outcome.raw.is_null());
        assert!(outcome.reply.contains("(modi)"));
        assert!(outcome.reply.contains("5 chars"));
        assert_eq!(outcome.history_length, 2);
    }

    #[tokio::test]
    async fn test_mock_chat_unknown_persona_uses_default_key() {
        let service = mock_service();
        let outcome = service.chat(None, "Hi", Some("pirate")).await.unwrap();
        assert!(outcome.reply.contains("(default)"));
    }

    #[tokio::test]
    async fn test_compare_does_not_mutate_session() {
        let (service, _) = service_with(vec![
            StubProvider::reply("a"),
            StubProvider::reply("b"),
        ]);
        service.sessions().append("s1", Turn::user("earlier"));
        service.sessions().append("s1", Turn::assistant("reply"));
        let before = service.sessions().history("s1");

        let outcome = service
            .compare(
                Some("s1".to_string()),
                "Hi",
                &["modi".to_string(), "unknown".to_string()],
            )
            .await;

        assert_eq!(service.sessions().history("s1"), before);
        assert_eq!(outcome.results.len(), 2);
    }

    #[tokio::test]
    async fn test_compare_does_not_create_session_entry() {
        let (service, _) = service_with(vec![StubProvider::reply("a")]);
        service
            .compare(Some("fresh".to_string()), "Hi", &["modi".to_string()])
            .await;
        assert!(!service.sessions().contains("fresh"));
    }

    #[tokio::test]
    async fn test_compare_keys_results_by_original_key() {
        let service = mock_service();
        let outcome = service
            .compare(None, "Hi", &["modi".to_string(), "unknown".to_string()])
            .await;

        let keys: Vec<&str> = outcome.results.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["modi", "unknown"]);
        // The unknown key still produced a reply (default instruction) under
        // its own name.
        assert!(outcome.results["unknown"].is_reply());
    }

    #[tokio::test]
    async fn test_compare_isolates_per_persona_failures() {
        let (service, _) = service_with(vec![
            Err(GenerateError::Status {
                status: 429,
                body: "slow down".to_string(),
            }),
            StubProvider::reply("still here"),
        ]);

        let outcome = service
            .compare(None, "Hi", &["modi".to_string(), "default".to_string()])
            .await;

        match &outcome.results["modi"] {
            CompareEntry::Failure { error, details } => {
                assert_eq!(error, "Downstream error: 429");
                assert_eq!(details, "slow down");
            }
            other => panic!("expected failure slot, got {other:?}"),
        }
        assert!(outcome.results["default"].is_reply());
    }

    #[tokio::test]
    async fn test_compare_transport_failure_slot() {
        let (service, _) = service_with(vec![Err(GenerateError::Transport(
            "connection refused".to_string(),
        ))]);

        let outcome = service.compare(None, "Hi", &["modi".to_string()]).await;
        match &outcome.results["modi"] {
            CompareEntry::Failure { error, details } => {
                assert_eq!(error, "Request failed");
                assert!(details.contains("connection refused"));
            }
            other => panic!("expected failure slot, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_compare_empty_list_defaults_to_builtin_persona() {
        let service = mock_service();
        let outcome = service.compare(None, "Hi", &[]).await;
        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.results.contains_key(DEFAULT_COMPARE_PERSONA));
    }

    #[tokio::test]
    async fn test_compare_duplicate_keys_each_execute() {
        let (service, provider) = service_with(vec![
            StubProvider::reply("first"),
            StubProvider::reply("second"),
        ]);

        let outcome = service
            .compare(None, "Hi", &["modi".to_string(), "modi".to_string()])
            .await;

        // Both executions happened; the later outcome owns the slot.
        assert_eq!(provider.seen_prompts().len(), 2);
        assert_eq!(outcome.results.len(), 1);
        match &outcome.results["modi"] {
            CompareEntry::Reply { reply, .. } => assert_eq!(reply, "second"),
            other => panic!("expected reply slot, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_compare_prompt_extends_history_with_message() {
        let (service, provider) = service_with(vec![StubProvider::reply("ok")]);
        service.sessions().append("s1", Turn::user("earlier"));

        service
            .compare(Some("s1".to_string()), "now", &["modi".to_string()])
            .await;

        let prompts = provider.seen_prompts();
        assert!(prompts[0].contains("User: earlier\nUser: now\nAssistant:"));
    }

    #[tokio::test]
    async fn test_clear_deletes_history() {
        let service = mock_service();
        let outcome = service.chat(Some("s1".to_string()), "Hi", None).await.unwrap();
        assert_eq!(outcome.history_length, 2);

        assert!(service.clear("s1"));
        assert!(!service.sessions().contains("s1"));
        assert!(!service.clear("s1"));
    }
}
