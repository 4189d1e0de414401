//! # alexa-bridge-adapter-relay
//!
//! Driven adapter built on [reqwest](https://docs.rs/reqwest) that hands the
//! actual smart-home work to an upstream backend.
//!
//! ## Responsibilities
//! - [`RelayMessageHandler`](handler::RelayMessageHandler): forward each
//!   message (with its request context) to `<upstream>/smart_home`
//! - [`LwaAuth`](lwa::LwaAuth): obtain and cache Login-with-Amazon access
//!   tokens for the configured client credentials
//! - [`RelayProactiveMode`](proactive::RelayProactiveMode): ask the upstream
//!   backend to start pushing state changes to the event gateway
//!
//! ## Dependency rule
//! Depends on `alexa-bridge-app` for the port traits it implements and on
//! `alexa-bridge-domain` for the types it carries. Errors are converted into
//! [`BridgeError`](alexa_bridge_domain::error::BridgeError) at the port
//! boundary.

pub mod config;
pub mod error;
pub mod handler;
pub mod lwa;
pub mod proactive;

pub use config::RelayConfig;
pub use error::RelayError;
pub use handler::RelayMessageHandler;
pub use lwa::LwaAuth;
pub use proactive::RelayProactiveMode;
