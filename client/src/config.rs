//! HTTP pipeline configuration.
//!
//! Configuration values are provided by the application, not hardcoded at
//! call sites.

use std::time::Duration;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Fixed per-request upper bound. A call that has not resolved within this
/// window fails with a network-class error; there is no retry.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP pipeline configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, including any path prefix (e.g.
    /// `https://shop.example.com/api`).
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: 10 seconds.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the base URL from the `STOREFRONT_API_URL` environment
    /// variable, falling back to the default local backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        Self::new(format!("{}/api", base_url.trim_end_matches('/')))
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("https://shop.example.com/api");
        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_with_timeout() {
        let config =
            ClientConfig::new("https://shop.example.com/api").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
