//! View-registration port: mounts the smart-home endpoint on the host server.

use std::sync::Arc;

use alexa_bridge_domain::error::BridgeError;

use crate::config::SmartHomeConfig;

/// Host HTTP server able to expose the smart-home endpoint.
pub trait ViewRegistrar<A> {
    /// Register the smart-home view bound to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Registration`] when the host refuses the view,
    /// e.g. because its path is already taken.
    fn register_smart_home(&mut self, config: Arc<SmartHomeConfig<A>>) -> Result<(), BridgeError>;
}
