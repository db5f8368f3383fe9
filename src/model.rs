//! Data models for the link checker
//!
//! This module defines the request/response payloads of the HTTP API and the
//! intermediate values passed between the resolver and the scoring engine.

use serde::{Deserialize, Serialize};

/// Request payload for checking a link
///
/// # Example
/// ```json
/// {
///   "url": "https://bit.ly/3xyz"
/// }
/// ```
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CheckRequest {
    /// The (possibly shortened) URL to expand and assess
    ///
    /// Optional so that a missing field is reported as a validation error
    /// instead of an extractor rejection.
    pub url: Option<String>,
}

impl CheckRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Where a link ends up after all redirects have been followed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// The URL exactly as submitted
    pub original_url: String,

    /// The URL of the last hop
    pub final_url: String,

    /// Lowercase hostname of `final_url`
    pub domain: String,
}

/// Outcome of the rule-based risk scoring
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub is_safe: bool,

    /// Scaled risk score, always within 0..=100
    pub confidence: u8,

    /// Human-readable explanations, at most four, in rule order
    pub reasons: Vec<String>,

    /// Categorical threat labels, in rule order
    pub threats: Vec<String>,
}

/// Response returned after a successful check
///
/// # Example
/// ```json
/// {
///   "original": "https://bit.ly/3xyz",
///   "final": "http://192.168.1.1/",
///   "domain": "192.168.1.1",
///   "safe": false,
///   "confidence": 80,
///   "reasons": ["IP address used instead of domain"],
///   "threats": ["Direct IP access - highly suspicious", "High-risk phishing/malware attempt"]
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckResponse {
    pub original: String,

    #[serde(rename = "final")]
    pub final_url: String,

    pub domain: String,
    pub safe: bool,
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub threats: Vec<String>,
}

impl CheckResponse {
    pub fn new(target: ResolvedTarget, assessment: RiskAssessment) -> Self {
        Self {
            original: target.original_url,
            final_url: target.final_url,
            domain: target.domain,
            safe: assessment.is_safe,
            confidence: assessment.confidence,
            reasons: assessment.reasons,
            threats: assessment.threats,
        }
    }
}
