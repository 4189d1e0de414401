//! In-memory [`UserAuthenticator`] backed by a fixed token table.

use std::collections::HashMap;

use alexa_bridge_domain::error::BridgeError;
use alexa_bridge_domain::user::User;

use crate::ports::UserAuthenticator;

/// Resolves bearer tokens against a table loaded at startup.
///
/// The table is never modified after construction.
#[derive(Default)]
pub struct StaticUserAuthenticator {
    tokens: HashMap<String, User>,
}

impl StaticUserAuthenticator {
    /// Create an authenticator from `(token, user)` pairs.
    ///
    /// When a token appears twice, the last pair wins.
    pub fn new(entries: impl IntoIterator<Item = (String, User)>) -> Self {
        Self {
            tokens: entries.into_iter().collect(),
        }
    }

    /// Number of known tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl UserAuthenticator for StaticUserAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Option<User>, BridgeError> {
        Ok(self.tokens.get(token).cloned())
    }
}
