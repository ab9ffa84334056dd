//! Error types for the response provider
//!
//! Every failure of the outbound inference call is represented here. None of
//! them reach the conversation as an error: `WellnessProvider::respond`
//! renders them through `Display` into the assistant's reply text.

use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while calling the inference endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The endpoint answered with a non-success HTTP status
    #[error("API Error: {status} - {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body (may be empty)
        body: String,
    },

    /// The request did not complete within the configured timeout
    #[error("Connection Error: request timed out after {0:?}")]
    Timeout(Duration),

    /// Transport-level failure (DNS, connection refused, TLS, ...)
    #[error("Connection Error: {0}")]
    Transport(String),

    /// The response arrived but its body could not be read
    #[error("Error: {0}")]
    Body(String),
}

impl ProviderError {
    /// Classify a `reqwest` error, keeping the full source chain in the text
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return ProviderError::Timeout(timeout);
        }

        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !description.contains(&cause_text) {
                description.push_str(": ");
                description.push_str(&cause_text);
            }
            source = cause.source();
        }

        ProviderError::Transport(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_embeds_code_and_body() {
        let err = ProviderError::Status {
            status: 503,
            body: "model is loading".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: 503 - model is loading");
    }

    #[test]
    fn test_timeout_error_is_connection_error() {
        let err = ProviderError::Timeout(Duration::from_secs(30));
        let text = err.to_string();
        assert!(text.starts_with("Connection Error"));
        assert!(text.contains("timed out after 30s"));
    }

    #[test]
    fn test_transport_error_text() {
        let err = ProviderError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection Error: connection refused");
    }
}
