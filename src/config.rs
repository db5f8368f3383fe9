//! Runtime configuration
//!
//! Settings come from environment variables (a `.env` file is loaded by the
//! binary before this runs). Unparseable values fall back to the defaults.

use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RESOLVE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `PORT`
    pub port: u16,

    /// `RESOLVE_TIMEOUT_SECS`, total time allowed for following one link
    pub resolve_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            resolve_timeout: Duration::from_secs(DEFAULT_RESOLVE_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("RESOLVE_TIMEOUT_SECS").ok())
    }

    /// Builds a config from raw variable values
    pub fn from_vars(port: Option<String>, resolve_timeout_secs: Option<String>) -> Self {
        let port = match port {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let timeout_secs = match resolve_timeout_secs {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        value = %raw,
                        "invalid RESOLVE_TIMEOUT_SECS, using {}", DEFAULT_RESOLVE_TIMEOUT_SECS
                    );
                    DEFAULT_RESOLVE_TIMEOUT_SECS
                }
            },
            None => DEFAULT_RESOLVE_TIMEOUT_SECS,
        };

        Self {
            port,
            resolve_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
