//! # alexa-bridge-domain
//!
//! Pure domain model for the Alexa smart-home bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **request context** attributing work to a caller
//! - Define the **message** envelope (opaque smart-home protocol payload)
//! - Define **entity ids** and the rules deciding which entities are
//!   exposed to the voice assistant (filter + per-entity overrides)
//! - Define the authenticated **user** principal
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod context;
pub mod entity_config;
pub mod entity_filter;
pub mod entity_id;
pub mod message;
pub mod user;
