//! Chat data models
//!
//! Defines the message record exchanged between the user and the assistant.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user
    User,
    /// Message from the assistant/AI
    Assistant,
}

impl MessageRole {
    /// Convert the role to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single message in the conversation
///
/// Messages are immutable once created: fields are private and only exposed
/// through read accessors.
#[derive(Debug, Clone)]
pub struct Message {
    role: MessageRole,
    content: String,
    timestamp: DateTime<Local>,
}

impl Message {
    /// Create a new message stamped with the current wall-clock time
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Create a message from the user
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create a message from the assistant
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Role of the sender
    pub fn role(&self) -> MessageRole {
        self.role
    }

    /// Text of the message
    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the message was created
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Timestamp formatted for display (`HH:MM:SS`)
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let speaker = match self.role {
            MessageRole::User => "👤 You",
            MessageRole::Assistant => "🤖 Guide",
        };
        write!(f, "[{}] {}: {}", self.timestamp_label(), speaker, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
        assert_eq!(MessageRole::User.as_str(), "user");
    }

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hello");
        assert_eq!(user.role(), MessageRole::User);
        assert_eq!(user.content(), "hello");

        let assistant = Message::assistant(String::from("hi there"));
        assert_eq!(assistant.role(), MessageRole::Assistant);
        assert_eq!(assistant.content(), "hi there");
    }

    #[test]
    fn test_timestamp_label_format() {
        let message = Message::user("x");
        let label = message.timestamp_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }

    #[test]
    fn test_display_marks_speaker() {
        let user = Message::user("I can't sleep").to_string();
        assert!(user.contains("You: I can't sleep"));

        let assistant = Message::assistant("Try a routine").to_string();
        assert!(assistant.contains("Guide: Try a routine"));
        assert!(assistant.starts_with('['));
    }
}
