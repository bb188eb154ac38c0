//! Application configuration loaded from environment variables.

use std::sync::Arc;

use crate::error::{Result, StartupError};

/// Address the service binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 8888;

/// The secret compared against the `Authorization` header.
///
/// Cheap to clone; the value is never mutated after startup.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(Arc<str>);

impl AuthToken {
    /// Wraps a token value. Returns `None` for an empty string.
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let token = token.as_ref();
        if token.is_empty() {
            None
        } else {
            Some(Self(Arc::from(token)))
        }
    }

    /// Plain byte equality against a presented header value.
    pub fn matches(&self, presented: &[u8]) -> bool {
        self.0.as_bytes() == presented
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Server configuration.
///
/// `AUTH_TOKEN` is the only value read from the environment; the server
/// always binds `0.0.0.0:8888`.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub auth_token: AuthToken,
}

impl Config {
    /// Loads configuration through `lookup`. Fails when the token is absent
    /// or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_token = lookup("AUTH_TOKEN")
            .and_then(AuthToken::new)
            .ok_or(StartupError::MissingAuthToken)?;

        Ok(Self::with_token(auth_token))
    }

    /// Builds a configuration with the fixed bind address around `auth_token`.
    pub fn with_token(auth_token: AuthToken) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            auth_token,
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
