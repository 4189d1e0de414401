//! Request extractors for the smart-home endpoint.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;

use alexa_bridge_domain::message::Message;
use alexa_bridge_domain::user::User;

use crate::error::ApiError;

/// The authenticated caller, read from request extensions.
///
/// Authentication middleware puts the [`User`] there; a request without one
/// is rejected with `401`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(CurrentUser)
            .ok_or(ApiError::Unauthenticated)
    }
}

/// The request body parsed as an opaque JSON [`Message`].
///
/// Unlike `axum::Json` this does not insist on a `Content-Type` header: the
/// forwarding functions in front of the bridge do not always set one.
#[derive(Debug, Clone)]
pub struct JsonMessage(pub Message);

impl<S> FromRequest<S> for JsonMessage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::Body)?;
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(ApiError::MalformedJson)?;
        Ok(Self(Message::new(value)))
    }
}
