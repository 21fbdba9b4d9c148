//! Async traits shared across all thingscout crates.
//!
//! Every cross-crate abstraction is defined here so that higher layers depend
//! only on `thingscout-types`, not on each other.

use crate::{Collection, ProviderId, QueryKind, ScoutError, Thing, ThingFile};
use async_trait::async_trait;
use bytes::Bytes;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Storage for per-provider user auth tokens.
///
/// The host application owns durable preference storage and implements this
/// trait over it; the in-memory implementation in `thingscout-store` covers
/// tests and ephemeral sessions. One string token per provider.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the stored token for the given provider, if any.
    async fn load(&self, provider: &ProviderId) -> Result<Option<String>>;
    /// Persist the token for the given provider.
    async fn save(&self, provider: &ProviderId, token: &str) -> Result<()>;
    /// Remove the stored token for the given provider.
    async fn remove(&self, provider: &ProviderId) -> Result<()>;
}

/// Uniform capability interface over one upstream content provider.
///
/// Both providers expose the same operations even though their endpoint
/// shapes differ; each implementation owns its URL building, credential
/// attachment, and response normalization. All results are transient
/// read-models; nothing is cached between calls.
#[async_trait]
pub trait ThingClient: Send + Sync {
    /// The provider this client talks to.
    fn provider(&self) -> ProviderId;

    /// Fetch one page of the given query. Pages are 1-based, matching
    /// upstream convention. An empty page means the end of the results; no
    /// total count is available.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Upstream`] or [`ScoutError::Http`] on transport
    /// failure, and [`ScoutError::UnsupportedQuery`] when the provider has no
    /// endpoint for the query kind. A malformed response body is an empty
    /// page, not an error.
    async fn list_things(&self, query: &QueryKind, page: u32) -> Result<Vec<Thing>>;

    /// Fetch a single thing by id. `Ok(None)` means not found (including a
    /// body that did not decode to an object).
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Upstream`] or [`ScoutError::Http`] on transport
    /// failure.
    async fn get_thing(&self, thing_id: &str) -> Result<Option<Thing>>;

    /// Fetch the downloadable files attached to a thing.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Upstream`] or [`ScoutError::Http`] on transport
    /// failure.
    async fn list_files(&self, thing_id: &str) -> Result<Vec<ThingFile>>;

    /// Download a file by id, returning the raw response body unparsed.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Upstream`] or [`ScoutError::Http`] on transport
    /// failure.
    async fn download_file(&self, file_id: &str) -> Result<Bytes>;

    /// Fetch the signed-in (or configured) user's collections.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Upstream`] or [`ScoutError::Http`] on transport
    /// failure, and [`ScoutError::Config`] when the provider needs a
    /// configured account name that is absent.
    async fn list_collections(&self) -> Result<Vec<Collection>>;
}
