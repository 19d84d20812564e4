//! Client configuration loaded from environment variables.
//!
//! The base URL and timeouts are read once at startup; screens share a
//! single `Config` for the lifetime of the process.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the NeuroVerse backend (no trailing slash)
    pub base_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Where the session token file lives
    pub token_store_path: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_store_path: PathBuf::from("session.json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `NEUROVERSE_API_URL` is required; timeout and token path fall back
    /// to sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var("NEUROVERSE_API_URL")
            .map_err(|_| ConfigError::Missing("NEUROVERSE_API_URL"))?
            .trim_end_matches('/')
            .to_string();

        let request_timeout = env::var("NEUROVERSE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let token_store_path = env::var("NEUROVERSE_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_path());

        Ok(Self {
            base_url,
            request_timeout,
            token_store_path,
        })
    }
}

/// Default location for the persisted session tokens.
fn default_token_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("neuroverse")
        .join("session.json")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("NEUROVERSE_API_URL", "https://api.neuroverse.example/");
        env::remove_var("NEUROVERSE_TIMEOUT_SECS");

        let config = Config::from_env().expect("Config should load");

        // Trailing slash is stripped so path joining stays predictable
        assert_eq!(config.base_url, "https://api.neuroverse.example");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
