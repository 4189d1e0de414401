//! [`MessageHandler`] forwarding messages to the upstream backend.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use alexa_bridge_app::config::SmartHomeConfig;
use alexa_bridge_app::ports::{AccessTokenProvider, MessageHandler};
use alexa_bridge_domain::context::Context;
use alexa_bridge_domain::error::BridgeError;
use alexa_bridge_domain::message::Message;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Envelope posted to `<upstream>/smart_home`.
#[derive(Serialize)]
struct RelayRequest<'a> {
    message: &'a Message,
    context: &'a Context,
    endpoint: Option<&'a str>,
}

/// Forwards each smart-home message, with its context, to the upstream
/// backend and returns the backend's reply.
///
/// When the configuration carries an access-token accessor, the current
/// token is attached as a bearer token. A `204 No Content`, an empty body or
/// a JSON `null` all mean "no reply".
pub struct RelayMessageHandler {
    client: reqwest::Client,
    url: String,
}

impl RelayMessageHandler {
    /// Create a handler posting to `<upstream>/smart_home`.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &RelayConfig) -> Self {
        Self {
            client,
            url: config.upstream("smart_home"),
        }
    }

    async fn forward<A: AccessTokenProvider>(
        &self,
        config: &SmartHomeConfig<A>,
        message: &Message,
        context: &Context,
    ) -> Result<Option<Value>, RelayError> {
        let token = config.access_token().await.map_err(RelayError::Domain)?;

        let mut request = self.client.post(&self.url).json(&RelayRequest {
            message,
            context,
            endpoint: config.endpoint(),
        });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = RelayError::check(request.send().await?).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let reply: Value = serde_json::from_slice(&bytes).map_err(RelayError::Parse)?;
        Ok(match reply {
            Value::Null => None,
            reply => Some(reply),
        })
    }
}

impl MessageHandler for RelayMessageHandler {
    async fn handle_message<A: AccessTokenProvider>(
        &self,
        config: &SmartHomeConfig<A>,
        message: Message,
        context: Context,
    ) -> Result<Option<Value>, BridgeError> {
        self.forward(config, &message, &context)
            .await
            .map_err(|err| {
                tracing::warn!(
                    error = ?err,
                    message_id = message.message_id(),
                    "relaying smart home message failed"
                );
                err.into_domain(BridgeError::Handler)
            })
    }
}
