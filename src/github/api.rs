use std::sync::Arc;

use crate::github::Fetcher;

/// Repository endpoint of the public GitHub API.
pub const API_BASE: &str = "https://api.github.com/repos/";

/// Entry point for everything read from the upstream API.
///
/// Every URL fetched through it must live under `base_url`; the fetch itself is
/// delegated to whichever `Fetcher` was injected.
pub struct GitHubApi {
    pub(crate) fetcher: Box<dyn Fetcher>,
    pub base_url: String,
}

impl GitHubApi {
    pub fn new<F>(fetcher: F, base_url: impl Into<String>) -> Self
    where
        F: Fetcher + 'static,
    {
        Self {
            fetcher: Box::new(fetcher),
            base_url: base_url.into(),
        }
    }

    /// Upstream URL of the repository document for `owner/repo`.
    pub fn repository_url(&self, repo_path: &str) -> String {
        format!("{}{}", self.base_url, repo_path)
    }
}

pub type SharedApi = Arc<GitHubApi>;
