//! Data transfer objects for upstream documents and API responses.
//!
//! - `project`: Summary returned to clients, Contributor records read from upstream

pub mod project;

pub use project::*;
