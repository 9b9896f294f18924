//! HTTP fetch helpers over `reqwest`.
//!
//! Both entry points share [`Fetcher::request`], so header and auth handling
//! live in one place. Responses are never interpreted: a 404 is a successful
//! fetch and the caller checks the status.

use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

use crate::error::Result;

/// Per-request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer_token: Option<String>,
}

impl FetchOptions {
    /// Options carrying the given bearer token.
    #[must_use]
    pub fn with_bearer_token(token: impl Into<String>) -> Self {
        Self { bearer_token: Some(token.into()) }
    }
}

impl From<Option<&str>> for FetchOptions {
    fn from(token: Option<&str>) -> Self {
        Self { bearer_token: token.map(str::to_string) }
    }
}

/// Issues GET requests and hands back either the body bytes or the response.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with a default `reqwest` client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Creates a fetcher over an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn request(&self, endpoint: &str, options: &FetchOptions) -> RequestBuilder {
        let request = self.client.get(endpoint);
        match &options.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetches `endpoint` and resolves with the response handle, body unread.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] if the request cannot be built or sent.
    pub async fn fetch(&self, endpoint: &str, options: &FetchOptions) -> Result<Response> {
        debug!(endpoint, authorized = options.bearer_token.is_some(), "sending request");
        let response = self.request(endpoint, options).send().await?;
        debug!(endpoint, status = response.status().as_u16(), "received response");
        Ok(response)
    }

    /// Fetches `endpoint` and resolves with the full body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] if the request fails or the body
    /// cannot be read.
    pub async fn fetch_file(&self, endpoint: &str, options: &FetchOptions) -> Result<Bytes> {
        let body = self.fetch(endpoint, options).await?.bytes().await?;
        debug!(endpoint, len = body.len(), "read response body");
        Ok(body)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
