//! Provider client implementations and the client factory.
//!
//! Each provider module implements [`ThingClient`] for one upstream content
//! API. The [`make_client`] function creates a boxed client for a provider
//! identifier, wired to the shared HTTP client and auth session.

pub mod http_util;
pub mod myminifactory;
pub mod normalize;
pub mod thingiverse;

pub use http_util::ProviderHttp;
pub use myminifactory::MyMiniFactoryClient;
pub use normalize::EntityMap;
pub use thingiverse::ThingiverseClient;

use reqwest::Client;
use std::sync::Arc;
use thingscout_auth::AuthSession;
use thingscout_config::Config;
use thingscout_types::{ProviderId, ThingClient};

/// Default page size for list queries, matching upstream convention.
pub const PER_PAGE: u32 = 20;

/// Per-client construction options, usually derived from the loaded
/// configuration via [`ClientOptions::from_config`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Pre-provisioned API token; takes precedence over the session token.
    pub api_token: Option<String>,
    /// Provider account name for user-scoped queries.
    pub username: Option<String>,
    /// Page size for list queries.
    pub per_page: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_token: None,
            username: None,
            per_page: PER_PAGE,
        }
    }
}

impl ClientOptions {
    /// Build options for one provider from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config, provider: &ProviderId) -> Self {
        let pc = config.provider(provider);
        Self {
            api_token: pc.api_token,
            username: pc.username,
            per_page: config.per_page,
        }
    }
}

/// Create a boxed client for the given provider.
#[must_use]
pub fn make_client(
    provider: &ProviderId,
    options: ClientOptions,
    session: Arc<AuthSession>,
    http: Client,
) -> Box<dyn ThingClient> {
    match provider {
        ProviderId::Thingiverse => Box::new(
            ThingiverseClient::new(http, session)
                .with_api_token(options.api_token)
                .with_per_page(options.per_page),
        ),
        ProviderId::MyMiniFactory => Box::new(
            MyMiniFactoryClient::new(http, session)
                .with_api_token(options.api_token)
                .with_username(options.username)
                .with_per_page(options.per_page),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thingscout_store::InMemoryTokenStore;

    fn make_session() -> Arc<AuthSession> {
        Arc::new(AuthSession::new(Arc::new(InMemoryTokenStore::new())))
    }

    #[test]
    fn test_make_client_every_provider() {
        for provider in ProviderId::all() {
            let client = make_client(
                provider,
                ClientOptions::default(),
                make_session(),
                Client::new(),
            );
            assert_eq!(client.provider(), *provider);
        }
    }

    #[test]
    fn test_client_options_default_page_size() {
        let opts = ClientOptions::default();
        assert_eq!(opts.per_page, 20);
        assert!(opts.api_token.is_none());
        assert!(opts.username.is_none());
    }

    #[test]
    fn test_client_options_from_config() {
        let config = Config::from_yaml(
            r#"
per_page: 30
providers:
  myminifactory:
    api_token: "mmf-key"
    username: "maker42"
"#,
        )
        .unwrap();
        let opts = ClientOptions::from_config(&config, &ProviderId::MyMiniFactory);
        assert_eq!(opts.per_page, 30);
        assert_eq!(opts.api_token.as_deref(), Some("mmf-key"));
        assert_eq!(opts.username.as_deref(), Some("maker42"));

        let tv = ClientOptions::from_config(&config, &ProviderId::Thingiverse);
        assert_eq!(tv.per_page, 30);
        assert!(tv.api_token.is_none());
    }
}
