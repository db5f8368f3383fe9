//! Rule-based risk scoring
//!
//! Every rule contributes a fixed weight to a running score. The total is
//! scaled into a 0-100 confidence value and thresholded into a verdict.
//! Scoring is a pure function of `(final_url, domain)`.
//!
//! The rule tables are ordered. Order does not change the score, but it
//! decides which reasons survive truncation to [`MAX_REASONS`].

use std::sync::LazyLock;

use regex::Regex;

use crate::model::RiskAssessment;

/// Suspicious substrings and their weights, matched against the lowercased URL
pub const SUSPICIOUS_KEYWORDS: &[(&str, u32)] = &[
    ("login", 3),
    ("verify", 3),
    ("account", 2),
    ("secure", 2),
    ("bank", 4),
    ("paypal", 4),
    ("amazon", 3),
    ("free", 1),
    ("win", 2),
    ("prize", 2),
    ("urgent", 2),
    ("confirm", 2),
    ("update", 2),
    ("alert", 2),
    ("scam", 5),
    ("phish", 5),
    ("malware", 5),
    ("download", 3),
    ("install", 3),
    ("signin", 3),
    ("password", 3),
];

/// Extensions checked first; a hit here skips [`HIGH_RISK_TLDS`]
pub const VERY_HIGH_RISK_TLDS: &[&str] = &["tk", "ml", "ga", "cf"];
pub const VERY_HIGH_RISK_TLD_WEIGHT: u32 = 8;

pub const HIGH_RISK_TLDS: &[&str] = &["tk", "ml", "ga", "cf", "ru", "cn", "top", "xyz", "club"];
pub const HIGH_RISK_TLD_WEIGHT: u32 = 5;

pub const MAX_DOMAIN_LEN: usize = 30;
pub const LONG_DOMAIN_WEIGHT: u32 = 3;

pub const MAX_DOMAIN_LABELS: usize = 4;
pub const SUBDOMAIN_WEIGHT: u32 = 4;

pub const IP_HOST_WEIGHT: u32 = 10;

pub const MAX_URL_LEN: usize = 100;
pub const LONG_URL_WEIGHT: u32 = 2;

pub const MAX_DOTS: usize = 5;
pub const DOTS_WEIGHT: u32 = 3;

/// Path fragments typical of command or executable delivery
pub const COMMAND_PATTERNS: &[&str] = &["cgi-bin", "cmd.exe", "admin"];
pub const COMMAND_PATTERN_WEIGHT: u32 = 4;

/// Score-to-confidence scale factor
pub const CONFIDENCE_MULTIPLIER: u32 = 8;
pub const MAX_CONFIDENCE: u8 = 100;

/// Confidence at or above this is unsafe
pub const UNSAFE_THRESHOLD: u8 = 40;

/// Confidence at or above this is labelled high risk
pub const HIGH_RISK_THRESHOLD: u8 = 70;

pub const MAX_REASONS: usize = 4;

pub const THREAT_VERY_HIGH_RISK_TLD: &str = "Extremely risky domain extension";
pub const THREAT_HIGH_RISK_TLD: &str = "Unusual domain extension";
pub const THREAT_IP_HOST: &str = "Direct IP access - highly suspicious";
pub const THREAT_COMMAND_PATTERN: &str = "Potential malware delivery";
pub const THREAT_HIGH_RISK: &str = "High-risk phishing/malware attempt";
pub const THREAT_MODERATE_RISK: &str = "Moderate risk detected";

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$").expect("valid regex"));

#[derive(Default)]
struct Tally {
    score: u32,
    reasons: Vec<String>,
    threats: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: u32, reason: impl Into<String>) {
        self.score += weight;
        self.reasons.push(reason.into());
    }

    fn threat(&mut self, label: &str) {
        self.threats.push(label.to_string());
    }
}

/// Scores a resolved link
///
/// `domain` is expected to be the lowercase hostname of `final_url`.
pub fn assess(final_url: &str, domain: &str) -> RiskAssessment {
    let url = final_url.to_lowercase();
    let labels: Vec<&str> = domain.split('.').collect();
    let mut tally = Tally::default();

    for (keyword, weight) in SUSPICIOUS_KEYWORDS {
        if url.contains(keyword) {
            tally.add(*weight, format!("Contains suspicious keyword: \"{keyword}\""));
        }
    }

    // split always yields at least one item
    let tld = labels.last().copied().unwrap_or_default();
    if VERY_HIGH_RISK_TLDS.contains(&tld) {
        tally.add(
            VERY_HIGH_RISK_TLD_WEIGHT,
            format!("Very suspicious domain extension: .{tld}"),
        );
        tally.threat(THREAT_VERY_HIGH_RISK_TLD);
    } else if HIGH_RISK_TLDS.contains(&tld) {
        tally.add(
            HIGH_RISK_TLD_WEIGHT,
            format!("Suspicious domain extension: .{tld}"),
        );
        tally.threat(THREAT_HIGH_RISK_TLD);
    }

    if domain.chars().count() > MAX_DOMAIN_LEN {
        tally.add(LONG_DOMAIN_WEIGHT, "Unnaturally long domain name");
    }

    if labels.len() > MAX_DOMAIN_LABELS {
        tally.add(SUBDOMAIN_WEIGHT, "Multiple subdomains (possible obfuscation)");
    }

    if DOTTED_QUAD.is_match(domain) {
        tally.add(IP_HOST_WEIGHT, "IP address used instead of domain");
        tally.threat(THREAT_IP_HOST);
    }

    if url.chars().count() > MAX_URL_LEN {
        tally.add(LONG_URL_WEIGHT, "Unusually long URL");
    }

    if final_url.matches('.').count() > MAX_DOTS {
        tally.add(DOTS_WEIGHT, "Excessive dots in URL (possible obfuscation)");
    }

    if COMMAND_PATTERNS.iter().any(|pattern| url.contains(pattern)) {
        tally.add(COMMAND_PATTERN_WEIGHT, "Contains executable/command patterns");
        tally.threat(THREAT_COMMAND_PATTERN);
    }

    let confidence = confidence(tally.score);
    let (is_safe, verdict_threat) = verdict(confidence);
    if let Some(label) = verdict_threat {
        tally.threat(label);
    }

    tally.reasons.truncate(MAX_REASONS);

    RiskAssessment {
        is_safe,
        confidence,
        reasons: tally.reasons,
        threats: tally.threats,
    }
}

/// Scales a raw score into the 0-100 confidence range
pub fn confidence(score: u32) -> u8 {
    let scaled = score.saturating_mul(CONFIDENCE_MULTIPLIER);
    scaled.min(u32::from(MAX_CONFIDENCE)) as u8
}

/// Classifies a confidence value
///
/// Returns whether it is safe, plus the verdict-level threat label for
/// unsafe values. Boundaries belong to the higher bucket.
pub fn verdict(confidence: u8) -> (bool, Option<&'static str>) {
    if confidence < UNSAFE_THRESHOLD {
        (true, None)
    } else if confidence >= HIGH_RISK_THRESHOLD {
        (false, Some(THREAT_HIGH_RISK))
    } else {
        (false, Some(THREAT_MODERATE_RISK))
    }
}
