//! Axum router assembly.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use alexa_bridge_app::ports::UserAuthenticator;

use crate::auth::require_user;
use crate::registry::HttpRegistry;

/// Build the top-level axum [`Router`].
///
/// Every registered view sits behind the bearer-token middleware; `/health`
/// stays public. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<H, U>(registry: HttpRegistry<H>, authenticator: Arc<U>) -> Router
where
    U: UserAuthenticator + 'static,
{
    let views = registry
        .into_router()
        .layer(middleware::from_fn_with_state(authenticator, require_user::<U>));

    Router::new()
        .route("/health", get(health_check))
        .merge(views)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
