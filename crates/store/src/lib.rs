//! Token storage backends.
//!
//! Durable token persistence belongs to the host application, which
//! implements [`thingscout_types::TokenStore`] over its own preference
//! system. The in-memory store here covers tests and ephemeral sessions.

pub mod memory;

pub use memory::InMemoryTokenStore;
