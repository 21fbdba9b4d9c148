//! Per-session credential resolution across providers.
//!
//! The session reads the stored user token and falls back to the provider's
//! default public token, so the public endpoints keep working when nobody is
//! signed in. Token persistence lives behind [`TokenStore`], which the host
//! application implements over its own preference storage.

use std::sync::Arc;
use thingscout_types::{ProviderId, TokenStore, error::Result};

use crate::{myminifactory, thingiverse};

/// Default public token for a provider's unauthenticated endpoints.
#[must_use]
pub fn default_public_token(provider: &ProviderId) -> &'static str {
    match provider {
        ProviderId::Thingiverse => thingiverse::DEFAULT_TOKEN,
        ProviderId::MyMiniFactory => myminifactory::DEFAULT_TOKEN,
    }
}

/// Session-scoped auth state, owned by the host application.
pub struct AuthSession {
    store: Arc<dyn TokenStore>,
}

impl AuthSession {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Resolve the credential to attach to an outgoing request: the stored
    /// user token when present and non-empty, else the provider's default
    /// public token.
    ///
    /// A store read failure degrades to the default token so a broken
    /// preference backend cannot take the public endpoints down with it.
    pub async fn bearer_token(&self, provider: &ProviderId) -> String {
        match self.store.load(provider).await {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => default_public_token(provider).to_string(),
            Err(err) => {
                tracing::warn!(%provider, error = %err, "token store read failed, using default public token");
                default_public_token(provider).to_string()
            }
        }
    }

    /// Whether a non-empty user token is stored for the provider.
    pub async fn is_authenticated(&self, provider: &ProviderId) -> bool {
        matches!(self.store.load(provider).await, Ok(Some(t)) if !t.is_empty())
    }

    /// Store the token received from a completed login flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails to persist the token.
    pub async fn save_token(&self, provider: &ProviderId, token: &str) -> Result<()> {
        self.store.save(provider, token).await
    }

    /// Log out: subsequent requests revert to the default public token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails to remove the token.
    pub async fn clear(&self, provider: &ProviderId) -> Result<()> {
        self.store.remove(provider).await
    }
}
