//! Condensing a repository document into a `Summary`.
//!
//! Required fields are read in a fixed order and the first problem aborts the
//! whole build:
//! - absent (or null) field → `BadRequest`
//! - field of the wrong JSON type → `Internal`
//! - contributors or languages fetch failing for any reason → `Internal`
//!
//! An empty contributors listing is not an error; committer and commits stay
//! empty.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::github::GitHubApi;
use crate::models::{RawDocument, Summary};

/// Prefix of the `project` field in every summary.
pub const HOST_LABEL: &str = "github.com/";

impl GitHubApi {
    /// Fetches the repository document for `owner/repo` and condenses it.
    pub async fn project_info(&self, repo_path: &str) -> Result<Summary> {
        let doc = self.fetch_document(&self.repository_url(repo_path)).await?;
        self.build_summary(&doc).await
    }

    /// Validates `doc` and fills in the top contributor and languages.
    ///
    /// Contributors are fetched before `languages_url` is even looked at.
    pub async fn build_summary(&self, doc: &RawDocument) -> Result<Summary> {
        let full_name = required_str(doc, "full_name")?;
        let repo = format!("{HOST_LABEL}{full_name}");

        let owner = required_object(doc, "owner")?;
        let owner = required_str(owner, "login")?.to_string();

        let contributors_url = required_str(doc, "contributors_url")?;
        let contributors = self
            .fetch_contributors(contributors_url)
            .await
            .map_err(|e| secondary_failure("contributors_url", e))?;
        let (committer, commits) = contributors
            .into_iter()
            .next()
            .map(|top| (top.login, top.contributions))
            .unwrap_or_default();

        let languages_url = required_str(doc, "languages_url")?;
        let languages = self
            .fetch_document(languages_url)
            .await
            .map_err(|e| secondary_failure("languages_url", e))?
            .into_iter()
            .map(|(language, _)| language)
            .collect();

        Ok(Summary {
            repo,
            owner,
            committer,
            commits,
            languages,
        })
    }
}

fn required<'a>(doc: &'a RawDocument, key: &str) -> Result<&'a Value> {
    match doc.get(key) {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!(
            "malformed JSON, field '{key}' not found"
        ))),
        Some(value) => Ok(value),
    }
}

fn required_str<'a>(doc: &'a RawDocument, key: &str) -> Result<&'a str> {
    required(doc, key)?
        .as_str()
        .ok_or_else(|| AppError::Internal(format!("field '{key}' is not a string")))
}

fn required_object<'a>(doc: &'a RawDocument, key: &str) -> Result<&'a RawDocument> {
    required(doc, key)?
        .as_object()
        .ok_or_else(|| AppError::Internal(format!("field '{key}' is not an object")))
}

// The primary document already came back fine, so anything wrong past this
// point is on the server side, bad URLs included.
fn secondary_failure(key: &str, err: AppError) -> AppError {
    AppError::Internal(format!("following '{key}' failed: {err}"))
}
