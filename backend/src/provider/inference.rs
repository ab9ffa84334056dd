//! Inference endpoint client
//!
//! Direct HTTP client for the text-generation endpoint. Makes exactly one
//! attempt per call: no retries, no backoff.

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::provider::types::{InferenceParameters, InferenceRequest, InferenceResponse};
use crate::provider::NO_RESPONSE;
use reqwest::StatusCode;

/// HTTP client bound to one configured inference endpoint
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl InferenceClient {
    /// Create a client with its own connection pool
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client sharing an existing `reqwest::Client`
    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build the request body for a prompt
    pub fn build_request(&self, prompt: &str) -> InferenceRequest {
        InferenceRequest {
            inputs: format!("{}{}", self.config.prompt_prefix, prompt),
            parameters: InferenceParameters {
                max_new_tokens: self.config.max_new_tokens,
                temperature: self.config.temperature,
                return_full_text: self.config.return_full_text,
            },
        }
    }

    /// Send a prompt to the endpoint and return the generated text
    ///
    /// # Arguments
    /// * `credential` - Bearer token for the endpoint
    /// * `prompt` - The user's text, without the prefix
    ///
    /// # Returns
    /// * `Ok(String)` - Generated text, or the generic "no response" text when
    ///   the body has no recognizable text field
    /// * `Err(ProviderError)` - Non-200 status, timeout or transport failure
    pub async fn generate(&self, credential: &str, prompt: &str) -> Result<String, ProviderError> {
        let timeout = self.config.timeout;
        let request_body = self.build_request(prompt);

        tracing::debug!(
            endpoint = %self.config.endpoint_url,
            prompt_len = prompt.len(),
            timeout_ms = timeout.as_millis() as u64,
            "Calling inference endpoint"
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .bearer_auth(credential)
            .json(&request_body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status.as_u16(),
                error_body = %error_body,
                "Inference endpoint returned error status"
            );

            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(timeout)
            } else {
                ProviderError::Body(format!("failed to read response body: {}", e))
            }
        })?;

        let decoded = InferenceResponse::decode(&response_body);
        let shape = decoded.shape();
        match decoded.into_text() {
            Some(text) => {
                tracing::debug!(
                    shape = shape,
                    response_len = text.len(),
                    "Received response from inference endpoint"
                );
                Ok(text)
            }
            None => {
                tracing::warn!(
                    shape = shape,
                    body_len = response_body.len(),
                    "Inference response carried no text, using fallback"
                );
                Ok(NO_RESPONSE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::time::Duration;

    fn config_for(server: &Server) -> ProviderConfig {
        ProviderConfig::default().with_endpoint(format!("{}/models/wellness", server.url()))
    }

    #[test]
    fn test_build_request_applies_prefix_and_parameters() {
        let client = InferenceClient::new(ProviderConfig::default());
        let request = client.build_request("How can I sleep better?");
        assert_eq!(
            request.inputs,
            "Wellness and health guidance: How can I sleep better?"
        );
        assert_eq!(request.parameters.max_new_tokens, 500);
        assert_eq!(request.parameters.temperature, 0.5);
        assert!(!request.parameters.return_full_text);
    }

    #[tokio::test]
    async fn test_generate_sends_bearer_and_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/wellness")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "inputs": "Wellness and health guidance: stress",
                "parameters": {
                    "max_new_tokens": 500,
                    "temperature": 0.5,
                    "return_full_text": false
                }
            })))
            .with_status(200)
            .with_body(r#"[{"generated_text": "Try breathing exercises."}]"#)
            .create_async()
            .await;

        let client = InferenceClient::new(config_for(&server));
        let result = client.generate("test-key", "stress").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "Try breathing exercises.");
    }

    #[tokio::test]
    async fn test_generate_object_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/wellness")
            .with_status(200)
            .with_body(r#"{"generated_text": "Drink water."}"#)
            .create_async()
            .await;

        let client = InferenceClient::new(config_for(&server));
        let result = client.generate("test-key", "hydration").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "Drink water.");
    }

    #[tokio::test]
    async fn test_generate_unexpected_shape_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/wellness")
            .with_status(200)
            .with_body(r#"{"estimated_time": 20.0}"#)
            .create_async()
            .await;

        let client = InferenceClient::new(config_for(&server));
        let result = client.generate("test-key", "anything").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_generate_invalid_json_falls_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/wellness")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let client = InferenceClient::new(config_for(&server));
        let result = client.generate("test-key", "anything").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/wellness")
            .with_status(500)
            .with_body("oops")
            .create_async()
            .await;

        let client = InferenceClient::new(config_for(&server));
        let err = client.generate("test-key", "anything").await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, ProviderError::Status { status: 500, .. }));
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("oops"));
    }

    #[tokio::test]
    async fn test_generate_non_200_success_status_is_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/wellness")
            .with_status(202)
            .with_body("accepted")
            .create_async()
            .await;

        let client = InferenceClient::new(config_for(&server));
        let err = client.generate("test-key", "anything").await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.to_string(), "API Error: 202 - accepted");
    }

    #[tokio::test]
    async fn test_generate_timeout() {
        // Accept connections but never answer
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let holder = tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        let config = ProviderConfig::default()
            .with_endpoint(format!("http://{}/models/wellness", addr))
            .with_timeout(Duration::from_millis(200));
        let client = InferenceClient::new(config);
        let err = client.generate("test-key", "anything").await.unwrap_err();

        assert!(matches!(err, ProviderError::Timeout(_)));
        assert!(err.to_string().contains("timed out"));
        holder.abort();
    }

    #[tokio::test]
    async fn test_generate_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ProviderConfig::default()
            .with_endpoint(format!("http://{}/models/wellness", addr))
            .with_timeout(Duration::from_secs(5));
        let client = InferenceClient::new(config);
        let err = client.generate("test-key", "anything").await.unwrap_err();

        assert!(matches!(err, ProviderError::Transport(_)));
        assert!(err.to_string().starts_with("Connection Error: "));
    }
}
