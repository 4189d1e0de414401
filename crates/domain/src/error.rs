//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BridgeError`]
//! when crossing a port boundary.

/// Boxed source error carried across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error returned by ports and application services.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The access-token collaborator could not produce a token.
    #[error("access token unavailable")]
    Auth(#[source] BoxError),

    /// The delegated smart-home message handler failed.
    #[error("smart home message handler failed")]
    Handler(#[source] BoxError),

    /// Proactive state reporting could not be enabled.
    #[error("proactive mode could not be enabled")]
    Proactive(#[source] BoxError),

    /// The host server refused to register a view.
    #[error("view registration failed")]
    Registration(#[source] BoxError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An entity id was empty.
    #[error("entity id must not be empty")]
    EmptyEntityId,

    /// An entity id did not follow the `<domain>.<object_id>` format.
    #[error("invalid entity id `{0}`, expected `<domain>.<object_id>`")]
    MalformedEntityId(String),

    /// A display name was empty.
    #[error("name must not be empty")]
    EmptyName,
}
