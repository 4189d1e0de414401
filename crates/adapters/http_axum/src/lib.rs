//! # alexa-bridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `POST /api/alexa/smart_home`, forwarding each smart-home message
//!   to the [`MessageHandler`](alexa_bridge_app::ports::MessageHandler) port
//!   and answering with its reply (or an empty body)
//! - Resolve the caller from the `Authorization: Bearer …` header through the
//!   [`UserAuthenticator`](alexa_bridge_app::ports::UserAuthenticator) port
//! - Act as the host server views are registered with
//!   ([`ViewRegistrar`](alexa_bridge_app::ports::ViewRegistrar))
//! - Map application errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `alexa-bridge-app` (for port traits and configuration) and
//! `alexa-bridge-domain` (for the types carried through requests). Never
//! leaks axum types into the domain.

pub mod auth;
pub mod error;
pub mod extract;
pub mod registry;
pub mod router;
pub mod smart_home;
