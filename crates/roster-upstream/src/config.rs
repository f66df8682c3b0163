//! Upstream connection settings

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::errors::{config_error, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8112/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where the provider lives and how long one call may take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL; `/employee` is appended per call
    pub base_url: String,

    /// Per-call timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl UpstreamConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parse and check the base URL.
    ///
    /// # Errors
    ///
    /// `Config` when the URL does not parse, is not http(s), or cannot carry
    /// path segments.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| config_error(format!("invalid upstream base_url '{}': {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(config_error(format!(
                "upstream base_url '{}' must be an http(s) URL",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// `Config` on a bad URL or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        if self.timeout_ms == 0 {
            return Err(config_error("upstream timeout_ms must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ExErrorKind;

    #[test]
    fn test_defaults_point_at_local_provider() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "http://localhost:8112/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = UpstreamConfig::default()
            .with_base_url("https://hr.example.com/v2")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.parsed_base_url().unwrap().host_str(), Some("hr.example.com"));
    }

    #[test]
    fn test_rejects_bad_urls_and_zero_timeout() {
        let not_a_url = UpstreamConfig::default().with_base_url("not a url");
        assert_eq!(not_a_url.validate().unwrap_err().kind(), ExErrorKind::Config);

        let wrong_scheme = UpstreamConfig::default().with_base_url("mailto:hr@example.com");
        assert!(wrong_scheme.validate().is_err());

        let zero = UpstreamConfig {
            timeout_ms: 0,
            ..UpstreamConfig::default()
        };
        assert!(zero.validate().is_err());
    }
}
