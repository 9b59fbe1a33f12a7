//! Environment-driven configuration for the HTTP adapter.

use super::HttpRepositoryError;
use std::env;
use std::time::Duration;

/// Environment variable naming the remote task service base URL.
pub const API_BASE_URL_VAR: &str = "TASKFLOW_API_BASE_URL";

/// Environment variable overriding the transport timeout in seconds.
pub const HTTP_TIMEOUT_VAR: &str = "TASKFLOW_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpTaskRepository`](super::HttpTaskRepository).
///
/// Transport-level timeout is the only timeout in the system; it surfaces
/// to callers as a network error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRepositoryConfig {
    base_url: String,
    timeout: Duration,
}

impl HttpRepositoryConfig {
    /// Creates a configuration with the default timeout.
    ///
    /// A trailing slash on the base URL is dropped so request paths join
    /// cleanly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the transport timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpRepositoryError::MissingBaseUrl`] when
    /// `TASKFLOW_API_BASE_URL` is unset or empty, and
    /// [`HttpRepositoryError::InvalidTimeout`] when
    /// `TASKFLOW_HTTP_TIMEOUT_SECS` does not parse as whole seconds.
    pub fn from_env() -> Result<Self, HttpRepositoryError> {
        let base_url = env::var(API_BASE_URL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(HttpRepositoryError::MissingBaseUrl)?;
        let mut config = Self::new(base_url);
        if let Ok(raw) = env::var(HTTP_TIMEOUT_VAR) {
            let seconds: u64 = raw
                .trim()
                .parse()
                .map_err(|_| HttpRepositoryError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout(Duration::from_secs(seconds));
        }
        Ok(config)
    }

    /// Returns the normalised base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the transport timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
