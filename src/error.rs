//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` so handlers can return them directly. Clients only ever see
//! the canonical status text; the detailed message goes to the log.
//!
//! Error mappings:
//! - `BadRequest` → 400
//! - `InvalidPath`, `Transport`, `Parse`, `Internal` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A URL handed to the fetch layer is outside the upstream API.
    #[error("Invalid path {path}, expected prefix {expected}")]
    InvalidPath { path: String, expected: String },

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Unexpected JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request or the upstream document lacks something required.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidPath { .. }
            | AppError::Transport(_)
            | AppError::Parse(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        let body = status.canonical_reason().unwrap_or_default();
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
