//! Relay adapter configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the relay collaborators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Base URL of the upstream smart-home backend.
    pub upstream_url: String,
    /// Login-with-Amazon token endpoint.
    pub token_url: String,
    /// OAuth scope requested with client credentials.
    pub scope: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: "http://127.0.0.1:8123".to_string(),
            token_url: "https://api.amazon.com/auth/o2/token".to_string(),
            scope: "alexa::proactive_events".to_string(),
            timeout_secs: 10,
        }
    }
}

impl RelayConfig {
    /// Build the shared HTTP client used by every relay collaborator.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error when the TLS backend cannot be initialised.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }

    /// `<upstream>/<path>`, tolerating a trailing slash on the base URL.
    #[must_use]
    pub fn upstream(&self, path: &str) -> String {
        format!("{}/{path}", self.upstream_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.upstream_url, "http://127.0.0.1:8123");
        assert_eq!(config.token_url, "https://api.amazon.com/auth/o2/token");
        assert_eq!(config.scope, "alexa::proactive_events");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn should_join_upstream_paths() {
        let mut config = RelayConfig::default();
        config.upstream_url = "http://backend:9000/".to_string();
        assert_eq!(config.upstream("smart_home"), "http://backend:9000/smart_home");
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let toml = r#"upstream_url = "http://10.0.0.2:8123""#;
        let config: RelayConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.upstream_url, "http://10.0.0.2:8123");
        assert_eq!(config.timeout_secs, 10);
    }
}
