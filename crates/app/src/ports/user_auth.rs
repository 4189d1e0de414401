//! User-authentication port: resolves bearer tokens to users.

use std::future::Future;
use std::sync::Arc;

use alexa_bridge_domain::error::BridgeError;
use alexa_bridge_domain::user::User;

/// Resolves the bearer token of an inbound request to the caller.
pub trait UserAuthenticator: Send + Sync {
    /// Return the user owning `token`, or `None` when the token is unknown.
    fn authenticate(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<User>, BridgeError>> + Send;
}

impl<T: UserAuthenticator> UserAuthenticator for Arc<T> {
    fn authenticate(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<User>, BridgeError>> + Send {
        (**self).authenticate(token)
    }
}
