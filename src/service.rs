//! Check orchestration
//!
//! Validates the submitted link, resolves it, scores the destination and
//! assembles the response. Resolution failures are logged here and then
//! collapsed into a single client-facing error.

use tracing::{info, warn};
use url::Url;

use crate::error::CheckError;
use crate::model::{CheckRequest, CheckResponse};
use crate::resolver::RedirectResolver;
use crate::scoring::assess;

/// Application state shared across all request handlers
///
/// Holds nothing mutable: the resolver only owns a connection pool.
#[derive(Clone)]
pub struct AppState {
    pub resolver: RedirectResolver,
}

/// Runs one link check end to end
///
/// # Errors
///
/// - [`CheckError::Validation`] when the URL is missing, empty, or not an
///   absolute `http://`/`https://` URL. No request is made.
/// - [`CheckError::Resolution`] for any failure while following redirects.
pub async fn check(
    resolver: &RedirectResolver,
    request: CheckRequest,
) -> Result<CheckResponse, CheckError> {
    let url = request.url.unwrap_or_default();
    validate_url(&url)?;

    let target = resolver.resolve(&url).await.map_err(|err| {
        warn!(%url, error = %err, "link resolution failed");
        CheckError::from(err)
    })?;

    let assessment = assess(&target.final_url, &target.domain);
    info!(
        original = %target.original_url,
        domain = %target.domain,
        confidence = assessment.confidence,
        safe = assessment.is_safe,
        "link checked"
    );

    Ok(CheckResponse::new(target, assessment))
}

/// Accepts only absolute URLs with an http or https scheme
pub fn validate_url(url: &str) -> Result<(), CheckError> {
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(CheckError::Validation);
    }

    match Url::parse(url) {
        Ok(parsed) if parsed.host_str().is_some() => Ok(()),
        _ => Err(CheckError::Validation),
    }
}
