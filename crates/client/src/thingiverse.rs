//! Client for the Thingiverse REST API.
//!
//! Credentials ride in an `Authorization: Bearer` header; when nobody is
//! signed in the session falls back to a default public token so the curated
//! endpoints (popular/featured/newest) keep working.

use crate::http_util::ProviderHttp;
use crate::normalize::{self, EntityMap};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use thingscout_auth::AuthSession;
use thingscout_types::{
    Collection, ProviderId, QueryKind, Thing, ThingFile,
    traits::{Result, ThingClient},
};

const ROOT_URL: &str = "https://api.thingiverse.com";

const THING_MAP: EntityMap = EntityMap {
    id: &["id"],
    // Search hits wrap the listing in a `thing` object; detail bodies don't.
    name: &["thing.name", "name"],
    description: &["description_html", "description"],
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
    // The collection listing carries no URL of its own; the creator's
    // profile URL is what the host links to.
    url: &["creator.public_url"],
};

/// Client for the Thingiverse API.
pub struct ThingiverseClient {
    ph: ProviderHttp,
    session: Arc<AuthSession>,
    api_token: Option<String>,
    root_url: String,
    per_page: u32,
}

impl ThingiverseClient {
    /// Creates a new client over the shared HTTP client and auth session.
    pub fn new(http: Client, session: Arc<AuthSession>) -> Self {
        Self {
            ph: ProviderHttp::new(http),
            session,
            api_token: None,
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

    /// Override the page size for list queries.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    async fn bearer_token(&self) -> String {
        if let Some(token) = &self.api_token {
            return token.clone();
        }
        self.session.bearer_token(&ProviderId::Thingiverse).await
    }

    async fn get(&self, url: &str) -> RequestBuilder {
        let token = self.bearer_token().await;
        self.ph
            .client()
            .get(url)
            .header("Authorization", format!("Bearer {token}"))
    }

    /// Relative path selecting things for the given query kind.
    fn query_path(query: &QueryKind) -> String {
        match query {
            QueryKind::Collection(id) => format!("collections/{id}/things"),
            QueryKind::Search(term) => format!("search/{term}"),
            QueryKind::LikedByMe => "users/me/likes".to_string(),
            QueryKind::MyThings => "users/me/things".to_string(),
            QueryKind::MadeByMe => "users/me/copies".to_string(),
            QueryKind::Popular => "popular".to_string(),
            QueryKind::Featured => "featured".to_string(),
            QueryKind::Newest => "newest".to_string(),
        }
    }

    fn page_url(&self, query: &QueryKind, page: u32) -> String {
        format!(
            "{}/{}?per_page={}&page={}",
            self.root_url,
            Self::query_path(query),
            self.per_page,
            page
        )
    }
}

#[async_trait]
impl ThingClient for ThingiverseClient {
    fn provider(&self) -> ProviderId {
        ProviderId::Thingiverse
    }

    async fn list_things(&self, query: &QueryKind, page: u32) -> Result<Vec<Thing>> {
        let url = self.page_url(query, page);
        tracing::debug!(%query, page, "fetching thing page");
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(normalize::things(&THING_MAP, body.as_ref()))
    }

    async fn get_thing(&self, thing_id: &str) -> Result<Option<Thing>> {
        let url = format!("{}/things/{thing_id}", self.root_url);
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(body.as_ref().and_then(|b| normalize::thing(&THING_MAP, b)))
    }

    async fn list_files(&self, thing_id: &str) -> Result<Vec<ThingFile>> {
        let url = format!("{}/things/{thing_id}/files", self.root_url);
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(normalize::thing_files(&FILE_MAP, body.as_ref()))
    }

    async fn download_file(&self, file_id: &str) -> Result<Bytes> {
        let url = format!("{}/files/{file_id}/download", self.root_url);
        self.ph.get_bytes(self.get(&url).await).await
    }

    async fn list_collections(&self) -> Result<Vec<Collection>> {
        let url = format!("{}/users/me/collections", self.root_url);
        let body = self.ph.get_json(self.get(&url).await).await?;
        Ok(normalize::collections(&COLLECTION_MAP, body.as_ref()))
    }
}
