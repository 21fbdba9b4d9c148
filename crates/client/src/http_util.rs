//! Shared HTTP helpers for provider clients.
//!
//! Owns the send → status-check → decode sequence so both clients treat
//! transport failures and malformed bodies the same way: only a failed send
//! or a non-2xx status is an error, while a body that does not decode as
//! JSON degrades to "no data".

use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use thingscout_types::{ScoutError, error::Result};

/// Shared HTTP helper wrapping the host-provided client.
#[derive(Clone)]
pub struct ProviderHttp {
    http: Client,
}

impl ProviderHttp {
    /// Creates a new helper wrapping the given HTTP client.
    #[must_use]
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Returns a reference to the inner HTTP client for building requests.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.http
    }

    /// Sends a request and checks for a success status.
    ///
    /// On non-2xx responses the body is parsed as JSON when possible and
    /// carried as the payload of [`ScoutError::Upstream`].
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Upstream`] on non-success HTTP status codes, or
    /// [`ScoutError::Http`] if the request fails to send.
    pub async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let resp = builder.send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let text = resp.text().await.unwrap_or_default();
            let payload = serde_json::from_str(&text).ok();
            Err(ScoutError::Upstream {
                status: status.as_u16(),
                payload,
            })
        }
    }

    /// Sends a request and decodes the body as JSON.
    ///
    /// A malformed or empty body is `Ok(None)` — upstream list endpoints are
    /// too inconsistent to treat that as a distinct error class.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures and non-success statuses.
    pub async fn get_json(&self, builder: RequestBuilder) -> Result<Option<Value>> {
        let resp = self.send(builder).await?;
        let body = resp.bytes().await?;
        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::debug!(error = %err, "response body is not valid JSON, treating as no data");
                Ok(None)
            }
        }
    }

    /// Sends a request and returns the raw response body unparsed.
    ///
    /// # Errors
    ///
    /// Returns an error only for transport failures and non-success statuses.
    pub async fn get_bytes(&self, builder: RequestBuilder) -> Result<Bytes> {
        let resp = self.send(builder).await?;
        Ok(resp.bytes().await?)
    }
}
