//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Nothing is read from or written to disk.

use std::env;
use std::time::Duration;

/// Default inference endpoint
///
/// A general conversational model standing in for a wellness-specific
/// backend. Override with `INFERENCE_ENDPOINT`.
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";

/// Default timeout for the inference call (in seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Text prepended to every prompt sent to the endpoint
pub const PROMPT_PREFIX: &str = "Wellness and health guidance: ";

/// Application configuration
#[derive(Clone, Default)]
pub struct Config {
    /// Inference provider configuration
    pub provider: ProviderConfig,
    /// Credential supplied through the environment, if any
    ///
    /// Only ever held in memory for the lifetime of the session.
    pub initial_credential: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("provider", &self.provider)
            .field(
                "initial_credential",
                &self.initial_credential.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Inference provider configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// URL the prompt is POSTed to
    pub endpoint_url: String,
    /// Upper bound on the whole request
    pub timeout: Duration,
    /// Prefix prepended to the user's text
    pub prompt_prefix: String,
    /// Generation parameter: maximum number of new tokens
    pub max_new_tokens: u32,
    /// Generation parameter: sampling temperature
    pub temperature: f64,
    /// Generation parameter: whether the prompt is echoed back
    pub return_full_text: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            prompt_prefix: PROMPT_PREFIX.to_string(),
            max_new_tokens: 500,
            temperature: 0.5, // Balanced temperature for empathetic responses
            return_full_text: false,
        }
    }
}

impl ProviderConfig {
    /// Use a different endpoint URL
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    /// Use a different request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = ProviderConfig::default();
        Self {
            provider: ProviderConfig {
                endpoint_url: env::var("INFERENCE_ENDPOINT")
                    .ok()
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or(defaults.endpoint_url),
                timeout: env::var("INFERENCE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
                ..defaults
            },
            initial_credential: env::var("HF_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        }
    }
}
