//! Smart-home payload endpoint.
//!
//! The Smart Home API expects its endpoint to be a cloud function. That
//! function forwards every directive here and relays our reply back, so this
//! view only moves JSON between HTTP and the
//! [`MessageHandler`](alexa_bridge_app::ports::MessageHandler) port.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;

use alexa_bridge_app::config::SmartHomeConfig;
use alexa_bridge_app::ports::{AccessTokenProvider, MessageHandler};
use alexa_bridge_domain::context::Context;

use crate::error::ApiError;
use crate::extract::{CurrentUser, JsonMessage};
use crate::registry::View;

/// Path the smart-home endpoint is served at.
pub const SMART_HOME_HTTP_ENDPOINT: &str = "/api/alexa/smart_home";

/// Exposes the Smart Home v3 payload interface via HTTP POST.
///
/// `Clone` is implemented manually so neither the handler nor the token
/// provider has to be `Clone`; only the `Arc`s are cloned.
pub struct SmartHomeView<H, A> {
    config: Arc<SmartHomeConfig<A>>,
    handler: Arc<H>,
}

impl<H, A> Clone for SmartHomeView<H, A> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<H, A> SmartHomeView<H, A> {
    /// Bind the view to the shared configuration and the message handler.
    pub fn new(config: Arc<SmartHomeConfig<A>>, handler: Arc<H>) -> Self {
        Self { config, handler }
    }

    #[must_use]
    pub fn config(&self) -> &Arc<SmartHomeConfig<A>> {
        &self.config
    }
}

impl<H, A> View for SmartHomeView<H, A>
where
    H: MessageHandler + 'static,
    A: AccessTokenProvider + 'static,
{
    const URL: &'static str = SMART_HOME_HTTP_ENDPOINT;
    const NAME: &'static str = "api:alexa:smart_home";

    fn into_router(self) -> Router {
        Router::new()
            .route(Self::URL, post(handle::<H, A>))
            .with_state(self)
    }
}

/// Possible successful responses from the smart-home endpoint.
#[derive(Debug)]
pub enum SmartHomeResponse {
    /// The handler replied with a JSON document.
    Ok(Json<serde_json::Value>),
    /// The handler had nothing to reply.
    Empty,
}

impl IntoResponse for SmartHomeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Empty => StatusCode::OK.into_response(),
        }
    }
}

/// `POST /api/alexa/smart_home`
///
/// # Errors
///
/// Rejects unauthenticated callers and malformed bodies before the handler
/// runs; handler failures are mapped by [`ApiError`].
pub async fn handle<H, A>(
    State(view): State<SmartHomeView<H, A>>,
    CurrentUser(user): CurrentUser,
    JsonMessage(message): JsonMessage,
) -> Result<SmartHomeResponse, ApiError>
where
    H: MessageHandler + 'static,
    A: AccessTokenProvider + 'static,
{
    tracing::debug!(
        user_id = %user.id,
        namespace = message.namespace(),
        name = message.name(),
        message_id = message.message_id(),
        %message,
        "received smart home request"
    );

    let context = Context::for_user(user.id);
    let response = view
        .handler
        .handle_message(&view.config, message, context)
        .await?;

    match &response {
        Some(body) => tracing::debug!(response = %body, "sending smart home response"),
        None => tracing::debug!("sending empty smart home response"),
    }

    Ok(response.map_or(SmartHomeResponse::Empty, |body| {
        SmartHomeResponse::Ok(Json(body))
    }))
}
