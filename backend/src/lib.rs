//! Wellness Guide Backend Library
//!
//! Headless conversation flow for the wellness chat: message store, response
//! provider and the session that ties them together. Display surfaces (the
//! terminal binary in `src/main.rs` and the native GUI) drive it through
//! [`session::ChatSession`].

pub mod chat;
pub mod config;
pub mod error;
pub mod provider;
pub mod session;

pub use chat::{ConversationStore, Message, MessageRole};
pub use config::{Config, ProviderConfig};
pub use error::ProviderError;
pub use provider::{Reply, ReplySource, ResponseProvider, WellnessProvider};
pub use session::ChatSession;
