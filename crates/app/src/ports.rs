//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod access_token;
pub mod message_handler;
pub mod proactive;
pub mod registrar;
pub mod user_auth;

pub use access_token::{AccessTokenProvider, NoAccessToken};
pub use message_handler::MessageHandler;
pub use proactive::ProactiveReporter;
pub use registrar::ViewRegistrar;
pub use user_auth::UserAuthenticator;
