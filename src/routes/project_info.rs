//! Project summary endpoint.
//!
//! GET /projectinfo/v1/github.com/{owner}/{repo}
//!
//! Returns the repository's full name, owner, top contributor with commit
//! count and languages, read from the GitHub API.
//!
//! Requests outside the prefix land here through the router fallback and are
//! answered with 400 before any upstream call.

use axum::{extract::State, http::Uri, routing::get, Json, Router};

use crate::error::{AppError, Result};
use crate::github::SharedApi;
use crate::models::Summary;

pub const ROUTE_PREFIX: &str = "/projectinfo/v1/github.com/";

pub fn routes(api: SharedApi) -> Router {
    Router::new()
        .route("/projectinfo/v1/github.com/{*repo}", get(get_project_info))
        .fallback(get_project_info)
        .with_state(api)
}

async fn get_project_info(State(api): State<SharedApi>, uri: Uri) -> Result<Json<Summary>> {
    let repo_path = repo_path(uri.path())?;
    tracing::debug!(repo = repo_path, "Building project summary");

    let summary = api.project_info(repo_path).await?;
    Ok(Json(summary))
}

fn repo_path(path: &str) -> Result<&str> {
    match path.strip_prefix(ROUTE_PREFIX) {
        Some(repo) if !repo.is_empty() => Ok(repo),
        _ => Err(AppError::BadRequest(format!(
            "path {path} does not name a repository under {ROUTE_PREFIX}"
        ))),
    }
}
