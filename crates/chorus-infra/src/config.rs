//! Environment configuration for the Chorus server.
//!
//! Reads the downstream credential and endpoint plus the static web
//! directory from the process environment. Missing or empty values never
//! fail startup: an unconfigured downstream simply puts the proxy in mock
//! mode, which is logged as a warning by the caller.

use std::path::PathBuf;

use secrecy::SecretString;

/// Environment variable holding the downstream API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the downstream endpoint URL.
pub const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";

/// Environment variable overriding the static web directory.
pub const WEB_DIR_VAR: &str = "CHORUS_WEB_DIR";

/// Default directory served to the browser client when it exists.
const DEFAULT_WEB_DIR: &str = "public";

/// Server configuration resolved from the environment.
pub struct ServerConfig {
    /// Downstream API credential; `None` when unset or empty.
    pub api_key: Option<SecretString>,
    /// Downstream endpoint URL; `None` when unset or empty.
    pub endpoint: Option<String>,
    /// Directory of static files for the browser client.
    pub web_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Empty strings count as unset, so `GEMINI_API_KEY=""` behaves the
    /// same as an absent variable.
    pub fn from_env() -> Self {
        let api_key = non_empty(std::env::var(API_KEY_VAR).ok()).map(SecretString::from);
        let endpoint = non_empty(std::env::var(ENDPOINT_VAR).ok());
        let web_dir = non_empty(std::env::var(WEB_DIR_VAR).ok())
            .unwrap_or_else(|| DEFAULT_WEB_DIR.to_string());

        Self {
            api_key,
            endpoint,
            web_dir: PathBuf::from(web_dir),
        }
    }

    /// Whether both credential and endpoint are present.
    ///
    /// When false, chat and compare substitute deterministic mock replies
    /// and no outbound call is made.
    pub fn downstream_configured(&self) -> bool {
        self.api_key.is_some() && self.endpoint.is_some()
    }
}

/// Treat empty strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, endpoint: Option<&str>) -> ServerConfig {
        ServerConfig {
            api_key: api_key.map(SecretString::from),
            endpoint: endpoint.map(String::from),
            web_dir: PathBuf::from(DEFAULT_WEB_DIR),
        }
    }

    #[test]
    fn test_non_empty_filters_empty_strings() {
        assert_eq!(non_empty(Some("value".to_string())), Some("value".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_downstream_configured_requires_both() {
        assert!(config(Some("key"), Some("https://example.com")).downstream_configured());
        assert!(!config(Some("key"), None).downstream_configured());
        assert!(!config(None, Some("https://example.com")).downstream_configured());
        assert!(!config(None, None).downstream_configured());
    }
}
