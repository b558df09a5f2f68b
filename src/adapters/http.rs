//! Reqwest-backed [`HttpClient`] adapter.
//!
//! Owns transport details only. Status codes and payloads are passed through
//! untouched for the loader to judge.

use crate::domain::model::HttpResponse;
use crate::domain::ports::{HttpClient, HttpClientResult, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("feed-loader/", env!("CARGO_PKG_VERSION"));

pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Builds an adapter with the default user agent and the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(timeout, DEFAULT_USER_AGENT)
    }

    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self::from_client(client))
    }

    /// Wraps an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> HttpClientResult {
        // Anything but http(s) cannot yield an HTTP response; refuse before any I/O.
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(TransportError::UnsupportedScheme(other.to_string())),
        }

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TransportError::request)?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        tracing::debug!("GET {} -> {}", final_url, status);

        // An absent body comes back from reqwest as zero bytes.
        let body = response.bytes().await.map_err(TransportError::request)?;

        Ok(HttpResponse {
            body: body.to_vec(),
            status,
            url: final_url,
        })
    }
}
