//! [`ProactiveReporter`] delegating state-change pushes to the upstream
//! backend.

use std::sync::Arc;

use serde::Serialize;

use alexa_bridge_app::config::SmartHomeConfig;
use alexa_bridge_app::ports::{AccessTokenProvider, ProactiveReporter};
use alexa_bridge_domain::error::BridgeError;

use crate::config::RelayConfig;
use crate::error::RelayError;

#[derive(Serialize)]
struct EnableRequest<'a> {
    endpoint: &'a str,
}

/// Asks the upstream backend to push state changes to the event gateway.
///
/// The backend owns state tracking; the bridge only tells it where to send
/// reports. The request carries the current access token so the backend can
/// verify the credentials before it starts.
pub struct RelayProactiveMode {
    client: reqwest::Client,
    url: String,
}

impl RelayProactiveMode {
    /// Create a reporter posting to `<upstream>/proactive`.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &RelayConfig) -> Self {
        Self {
            client,
            url: config.upstream("proactive"),
        }
    }

    async fn enable<A: AccessTokenProvider>(
        &self,
        config: &SmartHomeConfig<A>,
    ) -> Result<(), RelayError> {
        let endpoint = config.endpoint().ok_or(RelayError::MissingEndpoint)?;
        let token = config.access_token().await.map_err(RelayError::Domain)?;

        let mut request = self.client.post(&self.url).json(&EnableRequest { endpoint });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        RelayError::check(request.send().await?).await?;
        Ok(())
    }
}

impl ProactiveReporter for RelayProactiveMode {
    async fn enable_proactive_mode<A: AccessTokenProvider + 'static>(
        &self,
        config: Arc<SmartHomeConfig<A>>,
    ) -> Result<(), BridgeError> {
        self.enable(&config)
            .await
            .map_err(|err| err.into_domain(BridgeError::Proactive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alexa_bridge_domain::entity_config::EntityConfig;
    use alexa_bridge_domain::entity_filter::EntityFilter;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FixedToken;

    impl AccessTokenProvider for FixedToken {
        async fn access_token(&self) -> Result<String, BridgeError> {
            Ok("lwa-token".to_string())
        }
    }

    fn reporter_for(server: &MockServer) -> RelayProactiveMode {
        let config = RelayConfig {
            upstream_url: server.uri(),
            ..RelayConfig::default()
        };
        RelayProactiveMode::new(reqwest::Client::new(), &config)
    }

    fn config(endpoint: Option<&str>) -> Arc<SmartHomeConfig<FixedToken>> {
        Arc::new(SmartHomeConfig::new(
            endpoint.map(ToString::to_string),
            Some(Arc::new(FixedToken)),
            EntityFilter::accept_all(),
            EntityConfig::default(),
        ))
    }

    #[tokio::test]
    async fn should_announce_endpoint_to_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/proactive"))
            .and(header("authorization", "Bearer lwa-token"))
            .and(body_json(json!({
                "endpoint": "https://api.amazonalexa.com/v3/events"
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        reporter_for(&server)
            .enable_proactive_mode(config(Some("https://api.amazonalexa.com/v3/events")))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_fail_without_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let result = reporter_for(&server).enable_proactive_mode(config(None)).await;

        assert!(matches!(result, Err(BridgeError::Proactive(_))));
    }

    #[tokio::test]
    async fn should_fail_when_upstream_refuses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/proactive"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let result = reporter_for(&server)
            .enable_proactive_mode(config(Some("https://api.amazonalexa.com/v3/events")))
            .await;

        assert!(matches!(result, Err(BridgeError::Proactive(_))));
    }
}
