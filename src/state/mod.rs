// State management module
// Handles the chat session and GUI-side state

pub mod app_state;

pub use app_state::AppState;
