//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use alexa_bridge_domain::error::BridgeError;

/// JSON error body returned by the API.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Everything a smart-home request can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// No authenticated user is attached to the request.
    Unauthenticated,
    /// The request body could not be read.
    Body(BytesRejection),
    /// The request body is not valid JSON.
    MalformedJson(serde_json::Error),
    /// An application-level failure.
    Bridge(BridgeError),
}

impl From<BridgeError> for ApiError {
    fn from(err: BridgeError) -> Self {
        Self::Bridge(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Unauthenticated => {
                let body = Json(ErrorBody {
                    error: "authentication required".to_string(),
                });
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    body,
                )
                    .into_response();
            }
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
            Self::MalformedJson(err) => (StatusCode::BAD_REQUEST, format!("invalid JSON: {err}")),
            Self::Bridge(BridgeError::Validation(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Bridge(err @ BridgeError::Auth(_)) => {
                tracing::error!(error = ?err, "access token unavailable");
                (StatusCode::BAD_GATEWAY, "access token unavailable".to_string())
            }
            Self::Bridge(err) => {
                tracing::error!(error = ?err, "smart home request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
