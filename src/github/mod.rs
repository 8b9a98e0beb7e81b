pub mod api;
pub mod document;
pub mod fetch;
pub mod summary;

#[cfg(test)]
pub mod fixture;

pub use api::{GitHubApi, SharedApi, API_BASE};
pub use fetch::{Fetcher, HttpFetcher};
