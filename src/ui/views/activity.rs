use crate::KinderApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// Pantalla común de Sing Along, Q&A y Storytelling.
pub fn ui_activity(app: &mut KinderApp, ctx: &Context) {
    let text = app
        .activity_text()
        .map(|(icon, title, item)| (format!("{icon} {title}"), item.to_owned()));

    centered_panel(ctx, 240.0, 520.0, |ui| {
        ui.vertical_centered(|ui| match &text {
            Some((title, item)) => {
                ui.heading(title);
                ui.add_space(24.0);
                ui.label(RichText::new(item).size(24.0));
            }
            None => {
                ui.label("Nothing to show for this week yet.");
            }
        });
    });
}
