//! # alexa-bridged
//!
//! Composition root that wires the smart-home bridge together and serves it.
//!
//! ## Responsibilities
//! - Load configuration (`alexa-bridge.toml` plus environment overrides)
//! - Install the `tracing` subscriber
//! - Build the relay collaborators (message handler, LWA auth, proactive mode)
//! - Run the smart-home setup against the HTTP view registry
//! - Bind to a TCP port and serve until Ctrl-C or SIGTERM
//!
//! No domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

use alexa_bridge_adapter_http_axum::registry::HttpRegistry;
use alexa_bridge_adapter_http_axum::router;
use alexa_bridge_adapter_relay::{LwaAuth, RelayMessageHandler, RelayProactiveMode};
use alexa_bridge_app::setup::setup;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let authenticator = config.authenticator()?;
    if authenticator.is_empty() {
        tracing::warn!("no users configured, every smart home request will be rejected");
    }

    let client = config
        .relay
        .http_client()
        .context("building HTTP client")?;
    let handler = Arc::new(RelayMessageHandler::new(client.clone(), &config.relay));
    let proactive = RelayProactiveMode::new(client.clone(), &config.relay);
    let mut registry = HttpRegistry::new(handler);

    let smart_home = setup(
        config.smart_home_settings(),
        |credentials| LwaAuth::new(client.clone(), &config.relay, credentials),
        &proactive,
        &mut registry,
    )
    .await
    .context("setting up smart home")?;
    if let Some(auth) = &smart_home.auth {
        tracing::info!(client_id = auth.client_id(), "smart home auth manager active");
    }

    let app = router::build(registry, Arc::new(authenticator));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, upstream = %config.relay.upstream_url, "alexa-bridged listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("alexa-bridged stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
