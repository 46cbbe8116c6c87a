//! Client configuration
//!
//! Settings for the outbound HTTP client. Values come from code (via the
//! builder) or from environment variables:
//!
//! - `PAGEMETA_USER_AGENT`: identifying `User-Agent` header value
//! - `PAGEMETA_TIMEOUT_MS`: per-request timeout in milliseconds (default: 10000)
//! - `PAGEMETA_MAX_REDIRECTS`: redirect hops the client follows (default: 10)

use crate::error::{Error, Result};
use std::env;
use tracing::debug;

/// Environment variable for the `User-Agent` header
pub const USER_AGENT_ENV_VAR: &str = "PAGEMETA_USER_AGENT";
/// Environment variable for the request timeout
pub const TIMEOUT_ENV_VAR: &str = "PAGEMETA_TIMEOUT_MS";
/// Environment variable for the redirect limit
pub const MAX_REDIRECTS_ENV_VAR: &str = "PAGEMETA_MAX_REDIRECTS";

/// Default identifying header sent with every request
pub fn default_user_agent() -> String {
    format!("pagemeta/{} (+metadata probe)", crate::VERSION)
}

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// User agent sent with every probe and fetch
    pub user_agent: String,
    /// Request timeout in milliseconds (default: 10000)
    pub timeout_ms: u64,
    /// Maximum redirects to follow (default: 10)
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_ms: 10_000,
            max_redirects: 10,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ua) = lookup(USER_AGENT_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            config.user_agent = ua;
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            config.timeout_ms = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be an integer, got {:?}", TIMEOUT_ENV_VAR, raw))
            })?;
        }

        if let Some(raw) = lookup(MAX_REDIRECTS_ENV_VAR) {
            config.max_redirects = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{} must be an integer, got {:?}",
                    MAX_REDIRECTS_ENV_VAR, raw
                ))
            })?;
        }

        debug!(
            user_agent = %config.user_agent,
            timeout_ms = config.timeout_ms,
            max_redirects = config.max_redirects,
            "Loaded client configuration"
        );

        Ok(config)
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set user agent
    pub fn user_agent<S: Into<String>>(mut self, ua: S) -> Self {
        self.config.user_agent = ua.into();
        self
    }

    /// Set request timeout
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set redirect limit
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
