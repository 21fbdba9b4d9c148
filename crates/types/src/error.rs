//! Unified error type for the thingscout workspace.

use thiserror::Error;

/// Enumerates all error kinds that can occur across thingscout crates.
///
/// Parsing anomalies are deliberately **not** represented here: a malformed
/// or empty response body degrades to "no data" at the client layer, so only
/// transport-level and caller-level failures surface as errors.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// OAuth or credential authentication failure.
    #[error("authentication error: {0}")]
    Auth(String),

    /// HTTP transport error.
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The provider name does not match any supported provider.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// The provider has no endpoint for the requested query kind.
    #[error("query {query} is not supported by {provider}")]
    UnsupportedQuery {
        provider: crate::ProviderId,
        query: String,
    },

    /// The upstream provider returned a non-success status.
    #[error("upstream error: status={status}")]
    Upstream {
        status: u16,
        /// Provider error payload, when the error body decoded as JSON.
        payload: Option<serde_json::Value>,
    },
}

// ── Feature-gated From impls ──────────────────────────────────────────────────

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for ScoutError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl ScoutError {
    /// Returns the HTTP status code for upstream failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ScoutError>;
