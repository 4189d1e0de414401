//! Bearer-token authentication middleware.
//!
//! ```text
//! Request → require_user → User in extensions → CurrentUser extractor
//! ```
//!
//! A request without an `Authorization` header passes through untouched; the
//! handler's [`CurrentUser`](crate::extract::CurrentUser) extractor then
//! answers `401`. A request with an unknown token is rejected here.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use alexa_bridge_app::ports::UserAuthenticator;

use crate::error::ApiError;

/// Resolve the bearer token and attach the [`User`](alexa_bridge_domain::user::User)
/// to the request extensions.
pub async fn require_user<U>(
    State(authenticator): State<Arc<U>>,
    mut request: Request,
    next: Next,
) -> Response
where
    U: UserAuthenticator + 'static,
{
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(ToString::to_string);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match authenticator.authenticate(&token).await {
        Ok(Some(user)) => {
            tracing::trace!(user_id = %user.id, "request authenticated");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => {
            tracing::debug!("rejected unknown bearer token");
            ApiError::Unauthenticated.into_response()
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}

/// Token of an `Authorization` value using the `Bearer` scheme, which is
/// matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim_start().split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
}
