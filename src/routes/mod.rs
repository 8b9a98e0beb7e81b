//! API route handlers.
//!
//! - `project_info`: Repository summary (GET /projectinfo/v1/github.com/{owner}/{repo})

pub mod project_info;

use axum::Router;

use crate::github::SharedApi;

pub fn create_router(api: SharedApi) -> Router {
    Router::new().merge(project_info::routes(api))
}
