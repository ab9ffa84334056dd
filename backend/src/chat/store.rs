//! Conversation store
//!
//! In-memory, ordered record of the messages exchanged in the current session.

use super::models::Message;

/// Ordered sequence of messages for one interactive session
///
/// Grows by append only; the sole other mutation is clearing everything.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the end of the conversation
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove every message
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages currently held
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// Whether the conversation has no messages yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::models::MessageRole;

    #[test]
    fn test_store_creation() {
        let store = ConversationStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
        assert!(store.last().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = ConversationStore::new();
        store.append(Message::user("first"));
        store.append(Message::assistant("second"));
        store.append(Message::user("third"));

        let contents: Vec<&str> = store.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(store.last().unwrap().role(), MessageRole::User);
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut store = ConversationStore::new();
        store.append(Message::user("same"));
        store.append(Message::user("same"));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = ConversationStore::new();
        for i in 0..25 {
            store.append(Message::user(format!("message {}", i)));
        }
        assert_eq!(store.count(), 25);

        store.clear();
        assert_eq!(store.count(), 0);

        // Clearing an empty store is a no-op
        store.clear();
        assert!(store.is_empty());
    }
}
