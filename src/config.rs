//! Process configuration from the environment

use crate::line::DEFAULT_REPLY_ENDPOINT;
use thiserror::Error;

const DEFAULT_PORT: u16 = 5000;

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// Server configuration
#[derive(Clone)]
pub struct Config {
    /// Channel secret used to verify webhook signatures
    pub channel_secret: String,
    /// Channel access token used for the reply API
    pub channel_access_token: String,
    pub port: u16,
    pub reply_endpoint: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("channel_secret", &"<redacted>")
            .field("channel_access_token", &"<redacted>")
            .field("port", &self.port)
            .field("reply_endpoint", &self.reply_endpoint)
            .finish()
    }
}

impl Config {
    /// # Errors
    ///
    /// Fails when a secret is missing or `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            channel_secret: required("LINE_CHANNEL_SECRET")?,
            channel_access_token: required("LINE_CHANNEL_ACCESS_TOKEN")?,
            port,
            reply_endpoint: lookup("LINE_REPLY_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_REPLY_ENDPOINT.to_string()),
        })
    }
}
