// Wellness Guide GUI - Main Entry Point
// Native chat window for the wellness assistant

mod state;
mod ui;

use anyhow::Context as _;
use eframe::egui;
use state::AppState;
use std::sync::Arc;
use ui::{render_app_layout, UiAction};
use wellness_guide_backend::{ChatSession, Config, WellnessProvider};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    // One current-thread runtime; each send blocks the UI until it resolves
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wellness Guide Assistant")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Wellness Guide Assistant",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(WellnessGuideApp::new(config, runtime))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {}", e))
}

/// Main application struct
/// Owns the session state and the runtime used for the outbound call
struct WellnessGuideApp {
    /// Chat session plus GUI buffers
    state: AppState,
    /// Runtime the reply is awaited on
    runtime: tokio::runtime::Runtime,
}

impl WellnessGuideApp {
    /// Create a new application instance
    fn new(config: Config, runtime: tokio::runtime::Runtime) -> Self {
        let provider = Arc::new(WellnessProvider::new(config.provider));
        let mut state = AppState::new(ChatSession::new(provider));
        if let Some(key) = config.initial_credential {
            state.api_key_input = key;
            state.apply_api_key();
        }
        Self { state, runtime }
    }

    /// Apply an action collected while rendering
    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Send => self.state.send_input(&self.runtime),
            UiAction::ClearHistory => self.state.clear_history(),
            UiAction::ApplyApiKey => self.state.apply_api_key(),
        }
    }
}

impl eframe::App for WellnessGuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = render_app_layout(ctx, &mut self.state) {
            self.handle_action(action);
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_app_creation() {
        let app = WellnessGuideApp::new(Config::default(), test_runtime());
        assert_eq!(app.state.message_count(), 0);
        assert!(!app.state.session.has_credential());
    }

    #[test]
    fn test_app_with_initial_credential() {
        let config = Config {
            initial_credential: Some("hf_env".to_string()),
            ..Default::default()
        };
        let app = WellnessGuideApp::new(config, test_runtime());
        assert!(app.state.session.has_credential());
        assert_eq!(app.state.api_key_input, "hf_env");
    }

    #[test]
    fn test_handle_actions() {
        let mut app = WellnessGuideApp::new(Config::default(), test_runtime());
        app.state.input = "Any tips for drinking more water?".to_string();
        app.handle_action(UiAction::Send);
        assert_eq!(app.state.message_count(), 2);
        assert!(app.state.warning.is_some());

        app.handle_action(UiAction::ClearHistory);
        assert_eq!(app.state.message_count(), 0);
    }
}
