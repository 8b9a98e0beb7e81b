//! Outbound HTTP.
//!
//! `Fetcher` is the seam between the request pipeline and the network: one GET,
//! raw body back. `HttpFetcher` is the production implementation over a shared
//! `reqwest::Client` with verified TLS.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::error::{AppError, Result};

pub const USER_AGENT: &str = concat!("projectinfo/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs a single GET and returns the response body untouched.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        // Upstream error statuses still carry a JSON body; callers judge it by content.
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "Fetched upstream document");
        Ok(body.to_vec())
    }
}
