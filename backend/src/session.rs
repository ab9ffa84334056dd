//! Chat session
//!
//! The explicit context for one interactive session: the conversation store,
//! the in-memory credential and the response provider. Display surfaces
//! drive the conversation only through this type.

use crate::chat::{ConversationStore, Message};
use crate::provider::{ReplySource, ResponseProvider};
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};

/// One interactive chat session
pub struct ChatSession {
    store: ConversationStore,
    credential: Option<String>,
    provider: Arc<dyn ResponseProvider>,
}

impl ChatSession {
    /// Start an empty session using `provider` for replies
    pub fn new(provider: Arc<dyn ResponseProvider>) -> Self {
        Self {
            store: ConversationStore::new(),
            credential: None,
            provider,
        }
    }

    /// Set the credential used for the inference call
    ///
    /// An empty key clears the credential, switching back to simulated mode.
    pub fn set_credential(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            self.clear_credential();
        } else {
            debug!("API key configured for session");
            self.credential = Some(key);
        }
    }

    /// Forget the credential
    pub fn clear_credential(&mut self) {
        self.credential = None;
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Handle one submitted message
    ///
    /// Appends the user's message, resolves exactly one reply and appends it
    /// as the assistant's message. Empty input is ignored and returns `None`;
    /// any other text, whitespace included, is sent as typed. Returns where
    /// the reply came from.
    pub async fn submit(&mut self, text: &str) -> Option<ReplySource> {
        if text.is_empty() {
            return None;
        }

        self.store.append(Message::user(text));

        let span = info_span!(
            "interaction",
            prompt_len = text.len(),
            has_credential = self.credential.is_some(),
        );
        let reply = self
            .provider
            .respond(text, self.credential.as_deref())
            .instrument(span)
            .await;

        info!(
            source = ?reply.source,
            message_count = self.store.count() + 1,
            "Assistant reply recorded"
        );

        let source = reply.source;
        self.store.append(Message::assistant(reply.text));
        Some(source)
    }

    /// Remove every message from the conversation
    pub fn clear_history(&mut self) {
        info!(cleared = self.store.count(), "Chat history cleared");
        self.store.clear();
    }

    /// Number of messages in the conversation
    pub fn message_count(&self) -> usize {
        self.store.count()
    }

    /// Messages in display order
    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the credential
        f.debug_struct("ChatSession")
            .field("message_count", &self.store.count())
            .field("has_credential", &self.has_credential())
            .finish_non_exhaustive()
    }
}
