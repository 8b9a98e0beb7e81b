//! Fetching upstream JSON.
//!
//! Every URL is normalized and checked against the API base before anything
//! goes over the wire, so dot segments cannot climb out of it. Bodies are
//! parsed either as a generic object (`RawDocument`) or as a contributors
//! listing.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::github::GitHubApi;
use crate::models::{Contributor, RawDocument};

impl GitHubApi {
    /// Fetches `url` and parses it as a JSON object.
    pub async fn fetch_document(&self, url: &str) -> Result<RawDocument> {
        self.fetch_json(url).await
    }

    /// Fetches `url` and parses it as an array of contributor records.
    ///
    /// A `null` listing or `null` entry reads as empty rather than failing.
    pub async fn fetch_contributors(&self, url: &str) -> Result<Vec<Contributor>> {
        let listing: Option<Vec<Option<Contributor>>> = self.fetch_json(url).await?;
        Ok(listing
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let url = self.upstream_url(url)?;
        let body = self.fetcher.get(url.as_str()).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn upstream_url(&self, url: &str) -> Result<Url> {
        let invalid = || AppError::InvalidPath {
            path: url.to_string(),
            expected: self.base_url.clone(),
        };

        let parsed = Url::parse(url).map_err(|_| invalid())?;
        if !parsed.as_str().starts_with(&self.base_url) {
            return Err(invalid());
        }
        Ok(parsed)
    }
}
