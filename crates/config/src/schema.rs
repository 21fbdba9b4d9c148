use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thingscout_types::ProviderId;

fn default_true() -> bool {
    true
}

fn default_per_page() -> u32 {
    20
}

/// Configuration for a single provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Pre-provisioned API token (takes precedence over the session token).
    #[serde(default)]
    pub api_token: Option<String>,
    /// Provider account name, required for user-scoped MyMiniFactory queries.
    #[serde(default)]
    pub username: Option<String>,
    /// Whether this provider is enabled (defaults to `true`).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            username: None,
            enabled: true,
        }
    }
}

/// Top-level plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page size for list queries (defaults to 20).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Provider configuration map.
    #[serde(default)]
    pub providers: HashMap<ProviderId, ProviderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            providers: HashMap::new(),
        }
    }
}

impl Config {
    /// Parses configuration from a YAML string, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the YAML is invalid or extraction fails.
    #[allow(clippy::result_large_err)]
    pub fn from_yaml(yaml: &str) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::string(yaml))
            .extract()
    }

    /// Loads configuration from a file path, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn from_file(path: &std::path::Path) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .extract()
    }

    /// Returns the configuration for one provider, or defaults if absent.
    #[must_use]
    pub fn provider(&self, id: &ProviderId) -> ProviderConfig {
        self.providers.get(id).cloned().unwrap_or_default()
    }
}
