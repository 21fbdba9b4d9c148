//! In-memory token store backed by a `HashMap` behind a `Mutex`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use thingscout_types::{ProviderId, TokenStore, error::Result};

/// An in-memory [`TokenStore`] implementation for testing and ephemeral use.
pub struct InMemoryTokenStore {
    /// Provider-keyed token map.
    data: Mutex<HashMap<ProviderId, String>>,
}

impl InMemoryTokenStore {
    /// Creates a new empty in-memory token store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    /// Loads the token for the given provider, if present.
    async fn load(&self, provider: &ProviderId) -> Result<Option<String>> {
        Ok(self.data.lock().unwrap().get(provider).cloned())
    }

    /// Saves (or overwrites) the token for the given provider.
    async fn save(&self, provider: &ProviderId, token: &str) -> Result<()> {
        self.data
            .lock()
            .unwrap()
            .insert(provider.clone(), token.to_string());
        Ok(())
    }

    /// Removes the token for the given provider.
    async fn remove(&self, provider: &ProviderId) -> Result<()> {
        self.data.lock().unwrap().remove(provider);
        Ok(())
    }
}
