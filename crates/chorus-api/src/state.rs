//! Application state wiring the proxy's collaborators together.
//!
//! AppState holds the chat service used by the REST handlers. The service
//! is generic over the generation provider, but AppState pins it to the
//! concrete Gemini implementation from chorus-infra; an unconfigured
//! downstream leaves the provider slot empty, which puts the service in
//! mock mode.

use std::path::PathBuf;
use std::sync::Arc;

use chorus_core::chat::service::ChatService;
use chorus_core::persona::registry::PersonaRegistry;
use chorus_core::session::store::SessionStore;
use chorus_infra::config::ServerConfig;
use chorus_infra::gemini::GeminiProvider;

/// Concrete type alias for the chat service pinned to the Gemini provider.
pub type ConcreteChatService = ChatService<GeminiProvider>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    /// Static files directory for the browser client.
    pub web_dir: PathBuf,
}

impl AppState {
    /// Build the application state: session store, persona registry, and
    /// the downstream provider when credential and endpoint are present.
    pub fn new(config: ServerConfig) -> Self {
        let sessions = Arc::new(SessionStore::default());
        let personas = Arc::new(PersonaRegistry::builtin());

        let provider = match (config.api_key, config.endpoint) {
            (Some(api_key), Some(endpoint)) => {
                Some(Arc::new(GeminiProvider::new(api_key, endpoint)))
            }
            _ => None,
        };

        Self {
            chat_service: Arc::new(ChatService::new(sessions, personas, provider)),
            web_dir: config.web_dir,
        }
    }
}
