use crate::KinderApp;
use crate::ui::helpers::{gated_button, message_label};
use crate::ui::layout::centered_panel;
use crate::view_models::QuarterInfo;
use egui::Context;

pub fn ui_quarters(app: &mut KinderApp, ctx: &Context) {
    // Precomputar para no mantener el borrow durante el dibujado
    let infos: Vec<QuarterInfo> = app.quarter_infos();

    centered_panel(ctx, 320.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🌈 Choose Your Adventure! 🎠");
            ui.add_space(20.0);
            message_label(ui, &app.message);

            let content_width = ui.available_width();
            for info in &infos {
                if gated_button(ui, &info.label(), content_width, 44.0, info.unlocked) {
                    app.on_quarter(info.quarter);
                    return;
                }
                ui.add_space(8.0);
            }
        });
    });
}
