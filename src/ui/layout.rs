// Main application layout
// Menu bar, configuration sidebar, conversation view and message input

use eframe::egui;
use crate::state::AppState;
use crate::ui::components::*;

/// Action requested by the user during a frame
/// Applied by the app after rendering, outside any UI closure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Send the typed message
    Send,
    /// Clear the conversation
    ClearHistory,
    /// The API key field changed
    ApplyApiKey,
}

/// Render the main application layout
/// Returns the action the user triggered this frame, if any
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState) -> Option<UiAction> {
    let mut action = None;

    render_menu_bar(ctx, state, &mut action);

    if state.ui_state.sidebar_visible {
        render_sidebar(ctx, state, &mut action);
    }

    render_input_bar(ctx, state, &mut action);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(
                egui::RichText::new("🌿 Wellness Guide Assistant")
                    .size(28.0)
                    .strong()
                    .color(egui::Color32::from_rgb(78, 205, 196)),
            );
            ui.add_space(8.0);
        });
        ui.separator();

        let mut dismiss_warning = false;
        if let Some(warning) = &state.warning {
            ui.add_space(4.0);
            dismiss_warning = warning_banner(ui, warning);
            ui.add_space(4.0);
        }
        if dismiss_warning {
            state.warning = None;
        }

        egui::ScrollArea::vertical()
            .id_source("conversation_scroll")
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(8.0);
                if state.session.messages().is_empty() {
                    render_welcome_view(ui);
                } else {
                    for message in state.session.messages() {
                        message_bubble(ui, message);
                    }
                }
            });
    });

    render_about_window(ctx, state);

    action
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState, action: &mut Option<UiAction>) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Clear Chat History").clicked() {
                    *action = Some(UiAction::ClearHistory);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.style_mut(|style| {
                        style.visuals = if dark_mode {
                            egui::Visuals::dark()
                        } else {
                            egui::Visuals::light()
                        };
                    });
                }
                ui.checkbox(&mut state.ui_state.sidebar_visible, "Sidebar");
            });

            // Help menu
            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    state.ui_state.about_open = true;
                    ui.close_menu();
                }
            });
        });
    });
}

/// Render the left sidebar: configuration, statistics and about
fn render_sidebar(ctx: &egui::Context, state: &mut AppState, action: &mut Option<UiAction>) {
    egui::SidePanel::left("config_sidebar")
        .resizable(true)
        .default_width(260.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("🔧 Configuration");
            ui.add_space(4.0);
            ui.label("Hugging Face API Key");
            let key_field = ui.add(
                egui::TextEdit::singleline(&mut state.api_key_input)
                    .password(true)
                    .hint_text("Enter your Hugging Face API key")
                    .desired_width(f32::INFINITY),
            );
            if key_field.changed() {
                *action = Some(UiAction::ApplyApiKey);
            }
            if state.session.has_credential() {
                ui.colored_label(egui::Color32::from_rgb(0, 200, 0), "✅ API Key configured");
            } else {
                ui.label(egui::RichText::new("No key: replies are simulated").weak().italics());
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.heading("📊 Chat Statistics");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Total Messages");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(state.message_count().to_string()).strong().size(18.0));
                });
            });
            ui.add_space(8.0);
            if danger_button(ui, "🗑️ Clear Chat History").clicked() {
                *action = Some(UiAction::ClearHistory);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.heading("🌿 About Your Wellness Guide");
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .id_source("about_scroll")
                .show(ui, |ui| {
                    render_focus_areas(ui);
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Remember: This is for guidance only, not medical advice.")
                            .italics()
                            .weak(),
                    );
                });
        });
}

/// Render the message input row at the bottom of the window
fn render_input_bar(ctx: &egui::Context, state: &mut AppState, action: &mut Option<UiAction>) {
    egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let send_width = 80.0;
            let input = ui.add(
                egui::TextEdit::singleline(&mut state.input)
                    .hint_text("Type your message here...")
                    .desired_width(ui.available_width() - send_width - 8.0),
            );
            let enter_pressed = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let send_clicked = primary_button(ui, "   Send   ").clicked();

            if enter_pressed || send_clicked {
                *action = Some(UiAction::Send);
                input.request_focus();
            }
        });
        ui.add_space(8.0);
    });
}

/// Render the list of topics the guide covers
fn render_focus_areas(ui: &mut egui::Ui) {
    let areas = [
        ("🧘 Mental Health", "Stress management and mindfulness"),
        ("💪 Physical Wellness", "Exercise and movement guidance"),
        ("🥗 Nutrition", "Healthy eating habits and tips"),
        ("😴 Sleep Health", "Better rest and recovery"),
        ("🌱 Holistic Approach", "Mind-body-spirit balance"),
        ("💖 Self-Care", "Daily wellness practices"),
    ];
    for (title, detail) in areas {
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(title).strong());
            ui.label(detail);
        });
    }
}

/// Render welcome view when the conversation is empty
fn render_welcome_view(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.heading(egui::RichText::new("🌿 Welcome to Your Personal Wellness Guide!").size(20.0));
            ui.add_space(8.0);
            ui.label("I'm here to support you on your wellness journey. I can help you with various aspects of health and wellbeing:");
            ui.add_space(8.0);
            render_focus_areas(ui);
            ui.add_space(12.0);
            ui.label(egui::RichText::new("Try asking me about:").strong());
            for example in [
                "How can I manage stress better?",
                "What are some healthy breakfast ideas?",
                "I'm having trouble sleeping, any tips?",
                "How do I start a meditation practice?",
                "What exercises are good for beginners?",
            ] {
                ui.label(format!("  • \"{}\"", example));
            }
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(
                    "Remember: I provide general wellness guidance. For serious health concerns, please consult with healthcare professionals. 💙",
                )
                .weak(),
            );
        });
}

/// Render the About window when open
fn render_about_window(ctx: &egui::Context, state: &mut AppState) {
    egui::Window::new("About")
        .open(&mut state.ui_state.about_open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Wellness Guide Assistant").strong());
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(8.0);
            ui.label("Powered by Hugging Face 🤗 | Built with egui");
        });
}
