// Reusable UI components
// Message bubbles, buttons and the warning banner

use eframe::egui;
use wellness_guide_backend::{Message, MessageRole};

/// Visual treatment of a message bubble
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    /// Background fill
    pub fill: egui::Color32,
    /// Prefix shown before the text
    pub icon: &'static str,
    /// Which side of the conversation the bubble hugs
    pub align: egui::Align,
}

/// Pick the bubble style for a role
/// User: coral on the right, Assistant: teal on the left
pub fn bubble_style(role: MessageRole) -> BubbleStyle {
    match role {
        MessageRole::User => BubbleStyle {
            fill: egui::Color32::from_rgb(255, 107, 107),
            icon: "👤",
            align: egui::Align::Max,
        },
        MessageRole::Assistant => BubbleStyle {
            fill: egui::Color32::from_rgb(78, 205, 196),
            icon: "🤖",
            align: egui::Align::Min,
        },
    }
}

/// Render one message as a rounded, coloured bubble with its timestamp
pub fn message_bubble(ui: &mut egui::Ui, message: &Message) {
    let style = bubble_style(message.role());
    let max_width = ui.available_width() * 0.8;

    ui.with_layout(egui::Layout::top_down(style.align), |ui| {
        egui::Frame::none()
            .fill(style.fill)
            .rounding(egui::Rounding::same(16.0))
            .inner_margin(egui::Margin::symmetric(16.0, 10.0))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(
                    egui::RichText::new(format!("{} {}", style.icon, message.content()))
                        .color(egui::Color32::WHITE)
                        .size(15.0),
                );
                ui.label(
                    egui::RichText::new(message.timestamp_label())
                        .color(egui::Color32::from_white_alpha(180))
                        .small(),
                );
            });
    });
    ui.add_space(8.0);
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(text).strong())
}

/// Render a destructive action button (red text)
pub fn danger_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.button(egui::RichText::new(text).color(egui::Color32::from_rgb(220, 0, 0)))
}

/// Render a dismissible warning banner
/// Returns true if the user dismissed it
pub fn warning_banner(ui: &mut egui::Ui, text: &str) -> bool {
    let mut dismissed = false;
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(80, 64, 0))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(255, 210, 80), text);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    dismissed
}
