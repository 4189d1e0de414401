//! # alexa-bridge-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** for every collaborator the bridge talks to:
//!   - `AccessTokenProvider`: hands out bearer tokens for the voice assistant cloud
//!   - `MessageHandler`: answers smart-home directives
//!   - `ProactiveReporter`: pushes state changes without being asked
//!   - `ViewRegistrar`: mounts the smart-home endpoint on the host server
//!   - `UserAuthenticator`: resolves a bearer token to a [`User`](alexa_bridge_domain::user::User)
//! - Own the shared, read-only [`SmartHomeConfig`](config::SmartHomeConfig)
//! - Run the **setup** use-case wiring collaborators together
//! - Provide in-process implementations that need no IO
//!
//! ## Dependency rule
//! Depends on `alexa-bridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod ports;
pub mod services;
pub mod setup;
