//! Relay adapter error types.

use alexa_bridge_domain::error::{BoxError, BridgeError};

/// Errors specific to the relay adapter.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP request could not be sent or its body not read.
    #[error("upstream request failed")]
    Http(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream answered with status {status}")]
    Status { status: u16, body: String },

    /// The upstream answered with a body that is not the expected JSON.
    #[error("failed to parse upstream response")]
    Parse(#[source] serde_json::Error),

    /// The token endpoint announced a lifetime that cannot be represented.
    #[error("token lifetime of {0} seconds is out of range")]
    InvalidExpiry(i64),

    /// Proactive mode needs an event-gateway endpoint.
    #[error("no event gateway endpoint configured")]
    MissingEndpoint,

    /// A domain-level error (e.g. the token accessor failed).
    #[error("domain error")]
    Domain(#[source] BridgeError),
}

impl RelayError {
    /// Convert into a [`BridgeError`] for propagation across a port
    /// boundary, wrapping relay failures with `variant` (e.g.
    /// [`BridgeError::Handler`]). Domain errors pass through unchanged.
    pub fn into_domain(self, variant: fn(BoxError) -> BridgeError) -> BridgeError {
        match self {
            Self::Domain(err) => err,
            other => variant(Box::new(other)),
        }
    }

    /// Check the status of an upstream response, capturing the body of
    /// failures for the error message.
    pub(crate) async fn check(response: reqwest::Response) -> Result<reqwest::Response, Self> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}
