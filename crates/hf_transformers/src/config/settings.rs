//! Client settings and environment resolution

use std::env;
use std::time::Duration;

/// Public Hugging Face Inference API endpoint
pub const HUGGINGFACE_API_BASE: &str = "https://api-inference.huggingface.co";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variables consulted for the API token, in priority order
pub const TOKEN_ENV_VARS: [&str; 3] = ["HUGGINGFACE_API_TOKEN", "HF_TOKEN", "HUGGINGFACE_TOKEN"];

/// Overrides the API base URL
pub const ENDPOINT_ENV_VAR: &str = "HF_INFERENCE_ENDPOINT";

/// Overrides the request timeout, in seconds
pub const TIMEOUT_ENV_VAR: &str = "HF_INFERENCE_TIMEOUT";

/// Resolve the API token from the process environment.
///
/// Returns the first non-empty value among [`TOKEN_ENV_VARS`].
pub fn token_from_env() -> Option<String> {
    token_from_lookup(|name| env::var(name).ok())
}

/// Resolve the API token through an arbitrary variable lookup
pub fn token_from_lookup<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|token| !token.is_empty())
}

/// Settings shared by every client built from them
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: Option<String>,
    pub timeout: Duration,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            timeout: DEFAULT_TIMEOUT,
            base_url: HUGGINGFACE_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = token_from_lookup(&lookup);
        let timeout = lookup(TIMEOUT_ENV_VAR)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        let base_url = lookup(ENDPOINT_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| HUGGINGFACE_API_BASE.to_string());

        Self {
            token,
            timeout,
            base_url,
        }
    }

    /// Set the API token; an empty token clears it
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
