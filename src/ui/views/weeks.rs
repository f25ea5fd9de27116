use crate::KinderApp;
use crate::ui::helpers::{gated_button, message_label};
use crate::ui::layout::centered_panel;
use crate::view_models::WeekInfo;
use egui::{Context, Grid};

pub fn ui_weeks(app: &mut KinderApp, ctx: &Context) {
    let infos: Vec<WeekInfo> = app.week_infos();
    let heading = match app.navigator.selected_quarter() {
        Some(q) => format!("{q}: Choose a Week!"),
        None => "Choose a Week!".to_owned(),
    };

    centered_panel(ctx, 360.0, 460.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(heading);
            ui.add_space(16.0);
            message_label(ui, &app.message);

            // Dos columnas de cinco semanas
            let btn_w = (ui.available_width() - 16.0) / 2.0;
            let mut picked = None;
            Grid::new("weeks_grid")
                .num_columns(2)
                .spacing([16.0, 10.0])
                .show(ui, |ui| {
                    for (i, info) in infos.iter().enumerate() {
                        if gated_button(ui, &info.label(), btn_w, 40.0, info.unlocked) {
                            picked = Some(info.week);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            if let Some(week) = picked {
                app.on_week(week);
            }
        });
    });
}
