//! OAuth login flows for the supported providers.
//!
//! Each provider module carries its authorize-URL constants and default
//! public token. The callback listener receives the browser redirect, the
//! [`flow`] module drives a full interactive login, and [`AuthSession`]
//! decides which credential every outgoing request carries.

pub mod callback;
pub mod flow;
pub mod myminifactory;
pub mod session;
pub mod state;
pub mod thingiverse;

pub use session::AuthSession;
