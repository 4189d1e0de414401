//! Configuration loading from a TOML file with environment variable overrides.
//!
//! Looks for `alexa-bridge.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use alexa_bridge_adapter_relay::RelayConfig;
use alexa_bridge_app::services::static_users::StaticUserAuthenticator;
use alexa_bridge_app::setup::SmartHomeSettings;
use alexa_bridge_domain::entity_config::EntityConfig;
use alexa_bridge_domain::entity_filter::EntityFilter;
use alexa_bridge_domain::error::ValidationError;
use alexa_bridge_domain::id::UserId;
use alexa_bridge_domain::user::User;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Smart-home feature settings.
    pub smart_home: SmartHomeSection,
    /// Upstream backend and token endpoint.
    pub relay: RelayConfig,
    /// Callers allowed to reach the smart-home endpoint.
    pub users: Vec<UserConfig>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// `[smart_home]` section.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SmartHomeSection {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Event-gateway endpoint used for proactive reports.
    pub endpoint: Option<String>,
    pub filter: EntityFilter,
    pub entity_config: EntityConfig,
}

impl fmt::Debug for SmartHomeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartHomeSection")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("filter", &self.filter)
            .field("entity_config", &self.entity_config)
            .finish()
    }
}

/// One `[[users]]` entry.
#[derive(Deserialize)]
pub struct UserConfig {
    pub id: UserId,
    pub name: String,
    /// Bearer token the user authenticates with.
    pub token: String,
}

impl fmt::Debug for UserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from `alexa-bridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("alexa-bridge.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ALEXA_BRIDGE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("ALEXA_BRIDGE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("ALEXA_BRIDGE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("ALEXA_BRIDGE_CLIENT_ID") {
            self.smart_home.client_id = Some(val);
        }
        if let Some(val) = var("ALEXA_BRIDGE_CLIENT_SECRET") {
            self.smart_home.client_secret = Some(val);
        }
        if let Some(val) = var("ALEXA_BRIDGE_ENDPOINT") {
            self.smart_home.endpoint = Some(val);
        }
        if let Some(val) = var("ALEXA_BRIDGE_UPSTREAM_URL") {
            self.relay.upstream_url = val;
        }
        if let Some(val) = var("ALEXA_BRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.relay.upstream_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "relay.upstream_url must not be empty".to_string(),
            ));
        }

        let has_endpoint = self
            .smart_home
            .endpoint
            .as_deref()
            .is_some_and(|endpoint| !endpoint.trim().is_empty());
        if self.smart_home_settings().credentials().is_some() && !has_endpoint {
            return Err(ConfigError::Validation(
                "smart_home.endpoint is required when client credentials are set".to_string(),
            ));
        }

        let mut tokens = HashSet::new();
        for user in &self.users {
            if user.token.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "user `{}` has an empty token",
                    user.name
                )));
            }
            if !tokens.insert(user.token.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "user `{}` reuses a token that is already assigned",
                    user.name
                )));
            }
        }
        self.authenticator()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Settings handed to the smart-home setup routine.
    #[must_use]
    pub fn smart_home_settings(&self) -> SmartHomeSettings {
        SmartHomeSettings {
            client_id: self.smart_home.client_id.clone(),
            client_secret: self.smart_home.client_secret.clone(),
            endpoint: self.smart_home.endpoint.clone(),
            filter: self.smart_home.filter.clone(),
            entity_config: self.smart_home.entity_config.clone(),
        }
    }

    /// Build the token table for the configured users.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::User`] when a user has a blank name.
    pub fn authenticator(&self) -> Result<StaticUserAuthenticator, ConfigError> {
        let entries = self
            .users
            .iter()
            .map(|user| Ok((user.token.clone(), User::new(user.id, user.name.as_str())?)))
            .collect::<Result<Vec<_>, ValidationError>>()?;
        Ok(StaticUserAuthenticator::new(entries))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8124,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "alexa_bridged=info,alexa_bridge=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A configured user is invalid.
    #[error("invalid user")]
    User(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
