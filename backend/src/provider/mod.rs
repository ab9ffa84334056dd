//! Response provider
//!
//! Resolves a prompt to reply text, either by calling the inference endpoint
//! (credential present) or by producing a simulated reply (no credential).
//! Every outcome, including failures, resolves to text.

pub mod inference;
pub mod simulated;
pub mod types;

pub use inference::InferenceClient;
pub use simulated::SimulatedResponder;

use crate::config::ProviderConfig;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Reply text used when a successful response carries no recognizable text
pub const NO_RESPONSE: &str = "No response generated.";

/// Where a reply's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Generated by the inference endpoint
    Inference,
    /// Canned demo reply; no endpoint was contacted
    Simulated,
    /// Error description standing in for a reply
    Failed,
}

/// Text resolved for one prompt, tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show as the assistant's message
    pub text: String,
    /// Origin of the text
    pub source: ReplySource,
}

impl Reply {
    /// Reply produced by the endpoint
    pub fn inference(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Inference,
        }
    }

    /// Reply produced in demo mode
    pub fn simulated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Simulated,
        }
    }

    /// Reply carrying an error description
    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Failed,
        }
    }

    /// Whether this reply came from demo mode
    pub fn is_simulated(&self) -> bool {
        self.source == ReplySource::Simulated
    }
}

/// Capability mapping a prompt (plus optional credential) to reply text
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Resolve `prompt` to a reply; never fails
    async fn respond(&self, prompt: &str, credential: Option<&str>) -> Reply;
}

/// Provider backed by the inference endpoint, with simulated fallback
#[derive(Debug)]
pub struct WellnessProvider {
    inference: InferenceClient,
    simulated: SimulatedResponder,
}

impl WellnessProvider {
    /// Create a provider for the given endpoint configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_parts(InferenceClient::new(config), SimulatedResponder::new())
    }

    /// Create a provider from pre-built parts (e.g. a seeded responder)
    pub fn with_parts(inference: InferenceClient, simulated: SimulatedResponder) -> Self {
        Self {
            inference,
            simulated,
        }
    }
}

#[async_trait]
impl ResponseProvider for WellnessProvider {
    async fn respond(&self, prompt: &str, credential: Option<&str>) -> Reply {
        let credential = credential.filter(|key| !key.is_empty());

        let Some(key) = credential else {
            warn!("No API key configured, using simulated response");
            return Reply::simulated(self.simulated.respond(prompt));
        };

        match self.inference.generate(key, prompt).await {
            Ok(text) => {
                info!(response_len = text.len(), "Inference reply received");
                Reply::inference(text)
            }
            Err(e) => {
                error!(error = %e, "Inference call failed, replying with error text");
                Reply::failed(e.to_string())
            }
        }
    }
}
