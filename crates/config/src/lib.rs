//! Figment-based configuration for the thingscout plugin core.
//!
//! YAML configuration merged over serde defaults. The host application
//! decides where the file lives and when to reload it.

pub mod schema;

pub use schema::{Config, ProviderConfig};
