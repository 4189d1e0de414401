//! Login-with-Amazon access tokens for the configured client credentials.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use alexa_bridge_app::ports::AccessTokenProvider;
use alexa_bridge_app::setup::ClientCredentials;
use alexa_bridge_domain::error::BridgeError;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Tokens are renewed this long before they actually expire.
const EXPIRY_MARGIN: TimeDelta = TimeDelta::seconds(60);

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Auth manager bound to one pair of client credentials.
///
/// Uses the OAuth client-credentials grant and keeps the last token until
/// shortly before it expires. Concurrent callers wait on the same lock, so
/// at most one exchange is in flight.
pub struct LwaAuth {
    client: reqwest::Client,
    token_url: String,
    scope: String,
    credentials: ClientCredentials,
    cache: Mutex<Option<CachedToken>>,
}

impl LwaAuth {
    #[must_use]
    pub fn new(client: reqwest::Client, config: &RelayConfig, credentials: ClientCredentials) -> Self {
        Self {
            client,
            token_url: config.token_url.clone(),
            scope: config.scope.clone(),
            credentials,
            cache: Mutex::new(None),
        }
    }

    /// Client id this manager is bound to.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    async fn exchange(&self) -> Result<CachedToken, RelayError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];
        let response = self.client.post(&self.token_url).form(&params).send().await?;
        let bytes = RelayError::check(response).await?.bytes().await?;
        let token: TokenResponse = serde_json::from_slice(&bytes).map_err(RelayError::Parse)?;
        let expires_at = (token.expires_in >= 0)
            .then(|| TimeDelta::try_seconds(token.expires_in))
            .flatten()
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or(RelayError::InvalidExpiry(token.expires_in))?;

        tracing::debug!(
            client_id = %self.credentials.client_id,
            expires_in = token.expires_in,
            "obtained access token"
        );
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at,
        })
    }
}

impl AccessTokenProvider for LwaAuth {
    async fn access_token(&self) -> Result<String, BridgeError> {
        let mut cache = self.cache.lock().await;
        let still_valid = cache
            .as_ref()
            .filter(|cached| Utc::now() + EXPIRY_MARGIN < cached.expires_at);
        if let Some(cached) = still_valid {
            return Ok(cached.access_token.clone());
        }

        let fresh = self
            .exchange()
            .await
            .map_err(|err| err.into_domain(BridgeError::Auth))?;
        let access_token = fresh.access_token.clone();
        *cache = Some(fresh);
        Ok(access_token)
    }
}
