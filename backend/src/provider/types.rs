//! Inference API wire types
//!
//! The request body sent to the text-generation endpoint and the decoded
//! shapes of its response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the inference endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    /// Prompt text (prefix already applied)
    pub inputs: String,
    /// Generation parameters
    pub parameters: InferenceParameters,
}

/// Generation parameters sent with every request
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InferenceParameters {
    /// Maximum number of tokens to generate
    pub max_new_tokens: u32,
    /// Sampling temperature
    pub temperature: f64,
    /// Whether the prompt is echoed back in the output
    pub return_full_text: bool,
}

/// One generation result as returned by the endpoint
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Generated {
    /// Generated text (the usual field)
    #[serde(default)]
    pub generated_text: Option<String>,
    /// Alternative field some endpoints use for single-object replies
    #[serde(default)]
    pub response: Option<String>,
}

impl Generated {
    /// Decode one element, treating anything that is not the expected object
    /// as carrying no text
    fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Shape of a successful response body
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResponse {
    /// `[{"generated_text": "..."}, ...]`
    Sequence(Vec<Generated>),
    /// `{"generated_text": "..."}` or `{"response": "..."}`
    Object(Generated),
    /// Valid JSON of any other shape (string, number, null, ...)
    Unknown(Value),
    /// Body that is not JSON at all
    Malformed(String),
}

impl InferenceResponse {
    /// Decode a raw response body into one of the known shapes
    pub fn decode(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from(value),
            Err(_) => InferenceResponse::Malformed(body.to_string()),
        }
    }

    /// Short name of the shape, for logging
    pub fn shape(&self) -> &'static str {
        match self {
            InferenceResponse::Sequence(_) => "sequence",
            InferenceResponse::Object(_) => "object",
            InferenceResponse::Unknown(_) => "unknown",
            InferenceResponse::Malformed(_) => "malformed",
        }
    }

    /// Extract the reply text, if the shape carries one
    ///
    /// A sequence yields its first element's `generated_text`; an object
    /// yields `generated_text`, falling back to `response`.
    pub fn into_text(self) -> Option<String> {
        match self {
            InferenceResponse::Sequence(items) => {
                items.into_iter().next().and_then(|first| first.generated_text)
            }
            InferenceResponse::Object(generated) => {
                generated.generated_text.or(generated.response)
            }
            InferenceResponse::Unknown(_) | InferenceResponse::Malformed(_) => None,
        }
    }
}

impl From<Value> for InferenceResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => InferenceResponse::Sequence(
                items.into_iter().map(Generated::from_value).collect(),
            ),
            object @ Value::Object(_) => InferenceResponse::Object(Generated::from_value(object)),
            other => InferenceResponse::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = InferenceRequest {
            inputs: "Wellness and health guidance: sleep".to_string(),
            parameters: InferenceParameters {
                max_new_tokens: 500,
                temperature: 0.5,
                return_full_text: false,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "inputs": "Wellness and health guidance: sleep",
                "parameters": {
                    "max_new_tokens": 500,
                    "temperature": 0.5,
                    "return_full_text": false
                }
            })
        );
    }

    #[test]
    fn test_decode_sequence_shape() {
        let response = InferenceResponse::decode(r#"[{"generated_text": "X"}, {"generated_text": "Y"}]"#);
        assert_eq!(response.shape(), "sequence");
        assert_eq!(response.into_text(), Some("X".to_string()));
    }

    #[test]
    fn test_decode_empty_sequence_has_no_text() {
        let response = InferenceResponse::decode("[]");
        assert_eq!(response, InferenceResponse::Sequence(vec![]));
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_decode_sequence_of_non_objects() {
        let response = InferenceResponse::decode(r#"["just text"]"#);
        assert_eq!(response.shape(), "sequence");
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_decode_object_shape() {
        let response = InferenceResponse::decode(r#"{"generated_text": "hello"}"#);
        assert_eq!(response.shape(), "object");
        assert_eq!(response.into_text(), Some("hello".to_string()));
    }

    #[test]
    fn test_decode_object_response_field() {
        let response = InferenceResponse::decode(r#"{"response": "from response field"}"#);
        assert_eq!(response.into_text(), Some("from response field".to_string()));
    }

    #[test]
    fn test_decode_object_prefers_generated_text() {
        let response =
            InferenceResponse::decode(r#"{"generated_text": "primary", "response": "secondary"}"#);
        assert_eq!(response.into_text(), Some("primary".to_string()));
    }

    #[test]
    fn test_decode_object_without_text_fields() {
        let response = InferenceResponse::decode(r#"{"error": "Model is currently loading"}"#);
        assert_eq!(response.shape(), "object");
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_decode_unknown_shape() {
        let response = InferenceResponse::decode(r#""a bare string""#);
        assert_eq!(response, InferenceResponse::Unknown(json!("a bare string")));
        assert_eq!(response.into_text(), None);
    }

    #[test]
    fn test_decode_malformed_body() {
        let response = InferenceResponse::decode("This is not JSON");
        assert_eq!(response.shape(), "malformed");
        assert_eq!(response.into_text(), None);
    }
}
