// Application state management
// Holds the chat session plus the GUI-only buffers and toggles around it

use tokio::runtime::Runtime;
use wellness_guide_backend::{ChatSession, ReplySource};

/// Warning shown after a reply produced in demo mode
pub const SIMULATED_WARNING: &str =
    "⚠️ Using simulated response. Please add your API key in the sidebar for real Wellness Guide responses.";

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the sidebar is visible
    pub sidebar_visible: bool,
    /// Whether the About window is open
    pub about_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_visible: true,
            about_open: false,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// The conversation and credential for this window
    pub session: ChatSession,
    /// Text currently typed in the message box
    pub input: String,
    /// Text currently typed in the API key field (masked on screen)
    pub api_key_input: String,
    /// Warning raised by the last interaction, if any
    pub warning: Option<String>,
    /// UI state preferences
    pub ui_state: UiState,
}

impl AppState {
    /// Create the state around a fresh session
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            input: String::new(),
            api_key_input: String::new(),
            warning: None,
            ui_state: UiState::default(),
        }
    }

    /// Push the API key field into the session (empty clears it)
    pub fn apply_api_key(&mut self) {
        self.session.set_credential(self.api_key_input.clone());
    }

    /// Take the typed message, leaving the input box empty
    /// Returns None when nothing was typed
    pub fn take_input(&mut self) -> Option<String> {
        if self.input.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input))
    }

    /// Send the typed message and wait for the reply
    ///
    /// Blocks the calling (UI) thread until the single outbound call resolves
    /// or times out.
    pub fn send_input(&mut self, runtime: &Runtime) {
        let Some(text) = self.take_input() else {
            return;
        };
        let source = runtime.block_on(self.session.submit(&text));
        self.warning = match source {
            Some(ReplySource::Simulated) => Some(SIMULATED_WARNING.to_string()),
            _ => None,
        };
    }

    /// Clear the conversation and any pending warning
    pub fn clear_history(&mut self) {
        self.session.clear_history();
        self.warning = None;
    }

    /// Number of messages, for the statistics panel
    pub fn message_count(&self) -> usize {
        self.session.message_count()
    }
}
