//! View registry: the host server other components mount views on.

use std::sync::Arc;

use axum::Router;

use alexa_bridge_app::config::SmartHomeConfig;
use alexa_bridge_app::ports::{AccessTokenProvider, MessageHandler, ViewRegistrar};
use alexa_bridge_domain::error::BridgeError;

use crate::smart_home::SmartHomeView;

/// An HTTP view with a fixed path and a unique name.
pub trait View {
    /// Path the view is served at.
    const URL: &'static str;
    /// Unique name of the view, e.g. `api:alexa:smart_home`.
    const NAME: &'static str;

    /// Turn the view into a stateless router serving [`Self::URL`].
    fn into_router(self) -> Router;
}

/// A view that was accepted by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredView {
    pub name: &'static str,
    pub url: &'static str,
}

/// Registration failures.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// Another view already serves this path.
    #[error("a view is already registered at `{0}`")]
    DuplicateUrl(&'static str),
    /// Another view already uses this name.
    #[error("a view named `{0}` is already registered")]
    DuplicateName(&'static str),
}

/// Collects views into a single router.
///
/// Holds the message handler so the smart-home view can be registered
/// through the [`ViewRegistrar`] port with nothing but its configuration.
pub struct HttpRegistry<H> {
    handler: Arc<H>,
    router: Router,
    views: Vec<RegisteredView>,
}

impl<H> HttpRegistry<H> {
    /// Create an empty registry whose smart-home view will use `handler`.
    pub fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            router: Router::new(),
            views: Vec::new(),
        }
    }

    /// Mount `view`.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] when the path or the name is already
    /// taken; the registry is left unchanged.
    pub fn register_view<V: View>(&mut self, view: V) -> Result<(), RegistrationError> {
        if self.views.iter().any(|v| v.url == V::URL) {
            return Err(RegistrationError::DuplicateUrl(V::URL));
        }
        if self.views.iter().any(|v| v.name == V::NAME) {
            return Err(RegistrationError::DuplicateName(V::NAME));
        }

        let router = std::mem::replace(&mut self.router, Router::new());
        self.router = router.merge(view.into_router());
        self.views.push(RegisteredView {
            name: V::NAME,
            url: V::URL,
        });
        tracing::debug!(name = V::NAME, url = V::URL, "view registered");
        Ok(())
    }

    /// Views registered so far, in registration order.
    #[must_use]
    pub fn views(&self) -> &[RegisteredView] {
        &self.views
    }

    /// Consume the registry and return the merged router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

impl<H, A> ViewRegistrar<A> for HttpRegistry<H>
where
    H: MessageHandler + 'static,
    A: AccessTokenProvider + 'static,
{
    fn register_smart_home(&mut self, config: Arc<SmartHomeConfig<A>>) -> Result<(), BridgeError> {
        let view = SmartHomeView::new(config, Arc::clone(&self.handler));
        self.register_view(view)
            .map_err(|err| BridgeError::Registration(Box::new(err)))
    }
}
