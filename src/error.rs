//! Error types for link resolution and checking.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure while following a link to its destination.
///
/// Sub-causes are kept for logging only; callers treat every variant the same.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Transport-level failure: bad URL, refused connection, timeout, TLS, DNS.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The last hop has no hostname to score.
    #[error("final URL {url} has no host")]
    MissingHost { url: String },
}

/// Errors surfaced by the check endpoint.
///
/// The `Display` text is exactly what the client sees, so resolution causes
/// never reach the response body.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Input missing or not an http(s) URL.
    #[error("Valid URL required")]
    Validation,

    /// Any failure while following redirects.
    #[error("Invalid link or server blocked request")]
    Resolution(#[from] ResolveError),
}

impl IntoResponse for CheckError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}
