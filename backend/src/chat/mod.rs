//! Chat module
//!
//! Message records and the in-memory conversation store.

pub mod models;
pub mod store;

pub use models::{Message, MessageRole};
pub use store::ConversationStore;
