// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Botón con candado: deshabilitado y con tooltip mientras `unlocked == false`.
pub fn gated_button(ui: &mut Ui, label: &str, width: f32, height: f32, unlocked: bool) -> bool {
    let resp = ui.add_enabled(unlocked, Button::new(label).min_size(Vec2::new(width, height)));
    if unlocked {
        resp.clicked()
    } else {
        resp.on_disabled_hover_text("Locked: keep playing to open it!");
        false
    }
}

pub fn message_label(ui: &mut Ui, message: &str) {
    if message.is_empty() {
        return;
    }
    ui.add_space(8.0);
    ui.label(RichText::new(message).color(Color32::YELLOW).heading().strong());
    ui.add_space(8.0);
}
