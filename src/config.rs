use dioxus::logger::tracing;

use crate::auth::{session, storage};
use crate::guard::RefreshPolicy;

const DEFAULT_API_URL: &str = "http://localhost:3000/v1";

/// Bootstrap settings, fixed at build time and shared through the context.
///
/// Read from `API_BASE_URL`, `TOKEN_KEY`, `TOKEN_STORAGE` (`local` or
/// `session`) and `REFRESH_POLICY` (`ignore` or `require-success`) when the
/// wasm bundle is compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub token_key: String,
    pub persistence: storage::StorageType,
    pub refresh_policy: RefreshPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("TOKEN_KEY"),
            option_env!("TOKEN_STORAGE"),
            option_env!("REFRESH_POLICY"),
        )
    }
}

impl AppConfig {
    /// Unknown storage or policy names fall back to the defaults with a warning.
    pub fn from_values(
        api_url: Option<&str>,
        token_key: Option<&str>,
        persistence: Option<&str>,
        refresh_policy: Option<&str>,
    ) -> Self {
        let persistence = match persistence {
            None => storage::StorageType::default(),
            Some(name) => storage::StorageType::parse(name).unwrap_or_else(|| {
                tracing::warn!("unknown TOKEN_STORAGE {name:?}, using local storage");
                storage::StorageType::default()
            }),
        };

        let refresh_policy = match refresh_policy {
            None => RefreshPolicy::default(),
            Some(name) => RefreshPolicy::parse(name).unwrap_or_else(|| {
                tracing::warn!("unknown REFRESH_POLICY {name:?}, ignoring refresh failures");
                RefreshPolicy::default()
            }),
        };

        Self {
            api_url: api_url.unwrap_or(DEFAULT_API_URL).to_owned(),
            token_key: token_key.unwrap_or(session::DEFAULT_TOKEN_KEY).to_owned(),
            persistence,
            refresh_policy,
        }
    }

    pub fn session(&self) -> session::BrowserSession {
        session::BrowserSession::default()
            .with_key(self.token_key.as_str())
            .with_persistence(self.persistence)
    }
}
