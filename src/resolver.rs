//! Redirect resolution
//!
//! Follows a link with a HEAD request and reports where it lands. Only the
//! final hop is kept; intermediate redirects are not recorded.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::ResolveError;
use crate::model::ResolvedTarget;

/// Client identifier sent with every outbound request
pub const USER_AGENT: &str = "LinkUnshorten/1.0 (+https://linkunshorten.com)";

/// Follows redirects for submitted links
///
/// Wraps a single `reqwest::Client` so the connection pool is shared across
/// requests. The client has no cookie store, so nothing carries over between
/// checks.
#[derive(Clone, Debug)]
pub struct RedirectResolver {
    client: Client,
}

impl RedirectResolver {
    /// Builds a resolver whose requests give up after `timeout`
    ///
    /// Redirects are followed with reqwest's default policy (up to 10 hops).
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Follows `url` to its final destination
    ///
    /// The response body is never read and the final status code is not
    /// inspected: any response counts as having arrived.
    pub async fn resolve(&self, url: &str) -> Result<ResolvedTarget, ResolveError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|source| ResolveError::Request {
                url: url.to_string(),
                source,
            })?;

        let final_url = response.url().clone();
        let domain = final_url
            .host_str()
            .map(str::to_lowercase)
            .ok_or_else(|| ResolveError::MissingHost {
                url: final_url.to_string(),
            })?;

        debug!(%url, %final_url, status = %response.status(), "resolved link");

        Ok(ResolvedTarget {
            original_url: url.to_string(),
            final_url: final_url.to_string(),
            domain,
        })
    }
}
