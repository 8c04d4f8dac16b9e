//! Site configuration.
//!
//! The server loads it with `SiteConfig::from_env()` after calling
//! `dotenvy::dotenv()` and embeds a JSON copy in the page head, which the
//! hydrated client reads back with `SiteConfig::from_json()`.

use serde::{Deserialize, Serialize};

use crate::core::waitlist::FALLBACK_SUCCESS_MS;

/// Form processor that receives waitlist signups
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwkcSpS7g37C75TMLSM5nIRiS-2JgPNKlfAwxjHO-h7hbugzRi1IglOfYttPajU2huUSQ/exec";

/// Id of the `<script type="application/json">` element holding the client copy
pub const CONFIG_SCRIPT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WAITLIST_ENDPOINT must be an absolute http(s) URL, got {0:?}")]
    InvalidEndpoint(String),

    #[error("WAITLIST_FALLBACK_MS must be a positive number of milliseconds, got {0:?}")]
    InvalidFallback(String),

    #[error("Malformed site configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings shared by the server render and the hydrated client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// URL the waitlist forms POST to
    pub waitlist_endpoint: String,

    /// Milliseconds to wait for the hidden frame before reporting success anyway
    pub fallback_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            waitlist_endpoint: DEFAULT_WAITLIST_ENDPOINT.to_string(),
            fallback_ms: FALLBACK_SUCCESS_MS,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables keep their defaults; set but invalid ones are errors.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("WAITLIST_ENDPOINT").ok(),
            std::env::var("WAITLIST_FALLBACK_MS").ok(),
        )
    }

    pub fn from_vars(
        endpoint: Option<String>,
        fallback_ms: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(endpoint) = endpoint {
            config.waitlist_endpoint = endpoint.trim().to_string();
        }
        if let Some(raw) = fallback_ms {
            config.fallback_ms = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidFallback(raw.clone()))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.waitlist_endpoint;
        let has_host = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty() && !rest.starts_with('/'));
        if !has_host || endpoint.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
        }

        if self.fallback_ms == 0 {
            return Err(ConfigError::InvalidFallback(self.fallback_ms.to_string()));
        }

        Ok(())
    }

    /// Host part of the endpoint, for logging without the full URL
    pub fn endpoint_host(&self) -> &str {
        let rest = self
            .waitlist_endpoint
            .split_once("://")
            .map_or(self.waitlist_endpoint.as_str(), |(_, rest)| rest);
        rest.split(['/', '?', '#']).next().unwrap_or(rest)
    }

    /// Serialize for embedding inside a `<script>` element
    ///
    /// `<` is escaped so no value can close the element early.
    pub fn to_script_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
