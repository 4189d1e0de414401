//! Proactive-reporting port: server-initiated state-change pushes.

use std::future::Future;
use std::sync::Arc;

use alexa_bridge_domain::error::BridgeError;

use crate::config::SmartHomeConfig;
use crate::ports::AccessTokenProvider;

/// Starts pushing state changes to the voice assistant cloud.
///
/// Called once during setup, only when an access-token provider exists.
/// Implementations keep the configuration for as long as they report.
pub trait ProactiveReporter {
    /// Enable proactive mode for `config`.
    fn enable_proactive_mode<A: AccessTokenProvider + 'static>(
        &self,
        config: Arc<SmartHomeConfig<A>>,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}
