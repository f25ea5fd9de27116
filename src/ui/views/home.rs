use crate::KinderApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_home(app: &mut KinderApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("🌟 {} 🌟", app.title))
                    .size(34.0)
                    .strong()
                    .color(Color32::from_rgb(255, 102, 0)),
            );
            ui.add_space(6.0);
            ui.label(RichText::new("Let's learn and have fun!").heading());
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 360.0);
            if big_list_button(ui, "▶ PLAY".to_owned(), btn_w, 48.0, true) {
                app.on_play();
            }
            ui.add_space(8.0);
            if big_list_button(ui, "🏫 Student Scores".to_owned(), btn_w, 40.0, true) {
                app.on_student_scores();
            }
        });
    });
}
