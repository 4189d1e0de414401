//! Shared smart-home configuration.

use std::fmt;
use std::sync::Arc;

use alexa_bridge_domain::entity_config::{EntityConfig, EntityOverrides};
use alexa_bridge_domain::entity_filter::EntityFilter;
use alexa_bridge_domain::entity_id::EntityId;
use alexa_bridge_domain::error::BridgeError;

use crate::ports::AccessTokenProvider;

/// Read-only configuration shared by every smart-home request.
///
/// Built once during [`setup`](crate::setup::setup) and handed around behind
/// an `Arc`. Nothing mutates it afterwards, so concurrent requests read it
/// without locking.
pub struct SmartHomeConfig<A> {
    endpoint: Option<String>,
    access_token: Option<Arc<A>>,
    filter: EntityFilter,
    entity_config: EntityConfig,
}

impl<A> SmartHomeConfig<A> {
    /// Create a configuration.
    #[must_use]
    pub fn new(
        endpoint: Option<String>,
        access_token: Option<Arc<A>>,
        filter: EntityFilter,
        entity_config: EntityConfig,
    ) -> Self {
        Self {
            endpoint,
            access_token,
            filter,
            entity_config,
        }
    }

    /// Public event-gateway endpoint state reports are sent to.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Whether an access-token accessor is wired in.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Whether `entity_id` is exposed to the voice assistant.
    #[must_use]
    pub fn should_expose(&self, entity_id: &EntityId) -> bool {
        self.filter.should_expose(entity_id)
    }

    /// Overrides configured for `entity_id`, if any.
    #[must_use]
    pub fn entity_overrides(&self, entity_id: &EntityId) -> Option<&EntityOverrides> {
        self.entity_config.get(entity_id)
    }

    #[must_use]
    pub fn filter(&self) -> &EntityFilter {
        &self.filter
    }

    #[must_use]
    pub fn entity_config(&self) -> &EntityConfig {
        &self.entity_config
    }
}

impl<A: AccessTokenProvider> SmartHomeConfig<A> {
    /// Fetch a bearer token from the configured accessor.
    ///
    /// Returns `Ok(None)` when no accessor is configured.
    ///
    /// # Errors
    ///
    /// Propagates the accessor's error, typically [`BridgeError::Auth`].
    pub async fn access_token(&self) -> Result<Option<String>, BridgeError> {
        match &self.access_token {
            Some(provider) => provider.access_token().await.map(Some),
            None => Ok(None),
        }
    }
}

impl<A> fmt::Debug for SmartHomeConfig<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartHomeConfig")
            .field("endpoint", &self.endpoint)
            .field("access_token", &self.access_token.is_some())
            .field("filter", &self.filter)
            .field("entity_config", &self.entity_config.len())
            .finish()
    }
}
