//! In-memory `Fetcher` serving canned bodies, for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::github::{Fetcher, GitHubApi, API_BASE};

pub const STB_URL: &str = "https://api.github.com/repos/nothings/stb";
pub const STB_CONTRIBUTORS_URL: &str = "https://api.github.com/repos/nothings/stb/contributors";
pub const STB_LANGUAGES_URL: &str = "https://api.github.com/repos/nothings/stb/languages";

#[derive(Default)]
pub struct FixtureFetcher {
    bodies: HashMap<String, Vec<u8>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.as_bytes().to_vec());
        self
    }

    /// Handle on the URLs requested so far, usable after the fetcher is moved.
    pub fn requests(&self) -> Arc<Mutex<Vec<String>>> {
        self.requests.clone()
    }

    /// The nothings/stb repository with one contributor and two languages.
    pub fn stb() -> Self {
        Self::new()
            .with(
                STB_URL,
                &format!(
                    r#"{{"full_name":"nothings/stb","owner":{{"login":"nothings","id":1}},"contributors_url":"{STB_CONTRIBUTORS_URL}","languages_url":"{STB_LANGUAGES_URL}","stargazers_count":30000}}"#
                ),
            )
            .with(STB_CONTRIBUTORS_URL, r#"[{"login":"sean","contributions":500},{"login":"fabian","contributions":40}]"#)
            .with(STB_LANGUAGES_URL, r#"{"C":1000,"Lua":20}"#)
    }

    pub fn into_api(self) -> GitHubApi {
        GitHubApi::new(self, API_BASE)
    }
}

#[async_trait]
impl Fetcher for FixtureFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::Transport(format!("no route to host for {url}")))
    }
}
