//! Client for the MyMiniFactory v2 REST API.
//!
//! Credentials ride as a `key` query-string parameter on every request, and
//! user-scoped endpoints address the account by name rather than `me`, so a
//! configured username is required for those. File downloads embed the
//! target filename in the query string.

use crate::http_util::ProviderHttp;
use crate::normalize::{self, EntityMap};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use thingscout_auth::AuthSession;
use thingscout_types::{
    Collection, ProviderId, QueryKind, ScoutError, Thing, ThingFile,
    traits::{Result, ThingClient},
};

const ROOT_URL: &str = "https://www.myminifactory.com/api/v2";

const THING_MAP: EntityMap = EntityMap {
    id: &["id"],
    name: &["name"],
    description: &["description"],
    thumbnail: &["thumbnail"],
    url: &["public_url", "url"],
};

const FILE_MAP: EntityMap = EntityMap {
    id: &["id"],
    name: &["name"],
    description: &[],
    thumbnail: &["thumbnail"],
    url: &["public_url", "url"],
};

const COLLECTION_MAP: EntityMap = EntityMap {
    id: &["id"],
    name: &["name"],
    description: &["description"],
    thumbnail: &["thumbnail"],
    url: &["url"],
};

/// Client for the MyMiniFactory API.
pub struct MyMiniFactoryClient {
    ph: ProviderHttp,
    session: Arc<AuthSession>,
    api_token: Option<String>,
    username: Option<String>,
    root_url: String,
    per_page: u32,
}

impl MyMiniFactoryClient {
    /// Creates a new client over the shared HTTP client and auth session.
    pub fn new(http: Client, session: Arc<AuthSession>) -> Self {
        Self {
            ph: ProviderHttp::new(http),
            session,
            api_token: None,
            username: None,
            root_url: ROOT_URL.to_string(),
            per_page: crate::PER_PAGE,
        }
    }

    /// Override the API root URL (staging, tests).
    #[must_use]
    pub fn with_root_url(mut self, root_url: impl Into<String>) -> Self {
        self.root_url = root_url.into();
        self
    }

    /// Use a pre-provisioned API token instead of the session token.
    #[must_use]
    pub fn with_api_token(mut self, api_token: Option<String>) -> Self {
        self.api_token = api_token;
        self
    }

    /// Set the account name used by user-scoped endpoints.
    #[must_use]
    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Override the page size for list queries.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    async fn key(&self) -> String {
        if let Some(token) = &self.api_token {
            return token.clone();
        }
        self.session.bearer_token(&ProviderId::MyMiniFactory).await
    }

    /// Append the `key` credential to a URL that may already carry a query.
    fn with_key(url: &str, key: &str) -> String {
        if url.contains('?') {
            format!("{url}&key={key}")
        } else {
            format!("{url}?key={key}")
        }
    }

    async fn get(&self, url: &str) -> RequestBuilder {
        let key = self.key().await;
        self.ph.client().get(Self::with_key(url, &key))
    }

    fn username(&self) -> Result<&str> {
        self.username.as_deref().ok_or_else(|| {
            ScoutError::Config("MyMiniFactory username is not configured".into())
        })
    }

    /// Relative path selecting things for the given query kind.
    ///
    /// MyMiniFactory has no endpoints for search, makes, or the curated
    /// lists, so those query kinds are rejected up front.
    fn query_path(&self, query: &QueryKind) -> Result<String> {
        match query {
            QueryKind::Collection(id) => Ok(format!("collections/{id}")),
            QueryKind::LikedByMe => Ok(format!("users/{}/objects_liked", self.username()?)),
            QueryKind::MyThings => Ok(format!("users/{}/objects", self.username()?)),
            QueryKind::Search(_)
            | QueryKind::MadeByMe
            | QueryKind::Popular
            | QueryKind::Featured
            | QueryKind::Newest => Err(ScoutError::UnsupportedQuery {
                provider: ProviderId::MyMiniFactory,
                query: query.to_string(),
            }),
        }
    }

    fn page_url(&self, query: &QueryKind, page: u32) -> Result<String> {
        Ok(format!(
            "{}/{}?per_page={}&page={}",
            self.root_url,
            self.query_path(query)?,
            self.per_page,
            page
        ))
    }
}

#[async_trait]
impl ThingClient for MyMiniFactoryClient {
    fn provider(&self) -> ProviderId {
        ProviderId::MyMiniFactory
    }

    async fn list_things(&self, query: &QueryKind, page: u32) -> Result<Vec<Thing>> {
        let url = self.page_url(query, page)?;
        tracing::debug!(%query, page, "fetching thing page");
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(normalize::things(&THING_MAP, body.as_ref()))
    }

    async fn get_thing(&self, thing_id: &str) -> Result<Option<Thing>> {
        let url = format!("{}/objects/{thing_id}", self.root_url);
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(body.as_ref().and_then(|b| normalize::thing(&THING_MAP, b)))
    }

    async fn list_files(&self, thing_id: &str) -> Result<Vec<ThingFile>> {
        let url = format!("{}/object/{thing_id}/files", self.root_url);
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(normalize::thing_files(&FILE_MAP, body.as_ref()))
    }

    async fn download_file(&self, file_id: &str) -> Result<Bytes> {
        // The download endpoint will not serve without the target filename in
        // the query string.
        let url = format!(
            "{}/download/{file_id}/?downloadfile={file_id}.stl",
            self.root_url
        );
        self.ph.get_bytes(self.get(&url).await).await
    }

    async fn list_collections(&self) -> Result<Vec<Collection>> {
        let url = format!("{}/users/{}/collections", self.root_url, self.username()?);
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(normalize::collections(&COLLECTION_MAP, body.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thingscout_store::InMemoryTokenStore;

    fn make_client() -> MyMiniFactoryClient {
        let session = Arc::new(AuthSession::new(Arc::new(InMemoryTokenStore::new())));
        MyMiniFactoryClient::new(Client::new(), session).with_username(Some("maker42".into()))
    }

    #[test]
    fn test_query_paths_user_scoped() {
        let client = make_client();
        assert_eq!(
            client.query_path(&QueryKind::LikedByMe).unwrap(),
            "users/maker42/objects_liked"
        );
        assert_eq!(
            client.query_path(&QueryKind::MyThings).unwrap(),
            "users/maker42/objects"
        );
        assert_eq!(
            client.query_path(&QueryKind::Collection("7".into())).unwrap(),
            "collections/7"
        );
    }

    #[test]
    fn test_query_path_without_username_is_config_error() {
        let session = Arc::new(AuthSession::new(Arc::new(InMemoryTokenStore::new())));
        let client = MyMiniFactoryClient::new(Client::new(), session);
        let err = client.query_path(&QueryKind::LikedByMe).unwrap_err();
        assert!(matches!(err, ScoutError::Config(_)));
    }

    #[test]
    fn test_unsupported_query_kinds() {
        let client = make_client();
        for query in [
            QueryKind::Search("benchy".into()),
            QueryKind::MadeByMe,
            QueryKind::Popular,
            QueryKind::Featured,
            QueryKind::Newest,
        ] {
            let err = client.query_path(&query).unwrap_err();
            assert!(
                matches!(err, ScoutError::UnsupportedQuery { .. }),
                "expected UnsupportedQuery for {query}"
            );
        }
    }

    #[test]
    fn test_page_url_carries_pagination_params() {
        let client = make_client().with_per_page(20);
        let url = client.page_url(&QueryKind::Collection("7".into()), 2).unwrap();
        assert!(url.contains("collections/7?per_page=20&page=2"));
    }

    #[test]
    fn test_with_key_appends_correctly() {
        assert_eq!(
            MyMiniFactoryClient::with_key("https://x/api/objects/1", "k"),
            "https://x/api/objects/1?key=k"
        );
        assert_eq!(
            MyMiniFactoryClient::with_key("https://x/api/a?page=2", "k"),
            "https://x/api/a?page=2&key=k"
        );
    }

    #[tokio::test]
    async fn test_key_falls_back_to_default_token() {
        let client = make_client();
        assert_eq!(
            client.key().await,
            thingscout_auth::myminifactory::DEFAULT_TOKEN
        );
    }
}
