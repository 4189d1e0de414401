//! Message-handler port: answers smart-home directives.

use std::future::Future;

use alexa_bridge_domain::context::Context;
use alexa_bridge_domain::error::BridgeError;
use alexa_bridge_domain::message::Message;

use crate::config::SmartHomeConfig;
use crate::ports::AccessTokenProvider;

/// Handles one smart-home message and produces the reply.
///
/// The bridge treats both the message and the reply as opaque JSON. A
/// handler returning `Ok(None)` has nothing to say back; the caller answers
/// with an empty body.
pub trait MessageHandler: Send + Sync {
    /// Handle `message` on behalf of the caller described by `context`.
    fn handle_message<A: AccessTokenProvider>(
        &self,
        config: &SmartHomeConfig<A>,
        message: Message,
        context: Context,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, BridgeError>> + Send;
}
