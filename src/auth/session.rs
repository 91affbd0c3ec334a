#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use dioxus::logger::tracing;

use super::storage;

pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Opaque credential written at login. Its presence is taken as proof of an
/// authenticated session; nothing here verifies it.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Returns `None` for blank values, which storage may hold after a bad logout.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }

        Some(Self { value })
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

// keep the credential out of logs
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken").field("len", &self.value.len()).finish()
    }
}

/// Read/write access to the persisted session token.
///
/// Other tabs may change the underlying storage at any time, so callers must
/// read the token again instead of caching it.
pub trait SessionProvider {
    fn token(&self) -> Option<SessionToken>;

    fn store(&self, token: &SessionToken) -> anyhow::Result<()>;

    fn clear(&self) -> anyhow::Result<()>;
}

/// Session kept in the browser's web storage under a fixed key.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    key: String,
    persistence: storage::StorageType,
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self {
            key: DEFAULT_TOKEN_KEY.to_owned(),
            persistence: storage::StorageType::default(),
        }
    }
}

impl BrowserSession {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_persistence(mut self, persistence: storage::StorageType) -> Self {
        self.persistence = persistence;
        self
    }
}

impl SessionProvider for BrowserSession {
    fn token(&self) -> Option<SessionToken> {
        match storage::get_item(self.persistence, &self.key) {
            Ok(value) => value.and_then(SessionToken::new),
            Err(error) => {
                tracing::warn!("{error:?}");
                None
            }
        }
    }

    fn store(&self, token: &SessionToken) -> anyhow::Result<()> {
        storage::set_item(self.persistence, &self.key, token.as_str())
    }

    fn clear(&self) -> anyhow::Result<()> {
        storage::remove_item(self.persistence, &self.key)
    }
}
