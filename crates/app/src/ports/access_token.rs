//! Access-token port: bearer tokens for calls into the voice assistant cloud.

use std::future::Future;
use std::sync::Arc;

use alexa_bridge_domain::error::BridgeError;

/// Hands out a currently valid access token.
///
/// Implementations own the whole token lifecycle (exchange, caching,
/// refresh). Callers ask for a token each time they need one.
pub trait AccessTokenProvider: Send + Sync {
    /// Return a bearer token usable right now.
    fn access_token(&self) -> impl Future<Output = Result<String, BridgeError>> + Send;
}

impl<T: AccessTokenProvider> AccessTokenProvider for Arc<T> {
    fn access_token(&self) -> impl Future<Output = Result<String, BridgeError>> + Send {
        (**self).access_token()
    }
}

/// Placeholder provider for setups that never have credentials.
///
/// The type has no values, so a configuration typed with it can only carry
/// an absent token accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAccessToken {}

impl AccessTokenProvider for NoAccessToken {
    async fn access_token(&self) -> Result<String, BridgeError> {
        match *self {}
    }
}
