use crate::KinderApp;
use crate::model::ActivityId;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_activities(app: &mut KinderApp, ctx: &Context) {
    let heading = match app.navigator.selected_week() {
        Some(week) => format!("{week}: What shall we do?"),
        None => "What shall we do?".to_owned(),
    };
    let choices: Vec<(ActivityId, String)> = ActivityId::ALL
        .iter()
        .map(|&a| {
            let content = app.catalog.get(a);
            (a, format!("{} {}", content.icon, content.title))
        })
        .collect();

    centered_panel(ctx, 280.0, 380.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(heading);
            ui.add_space(20.0);
            let w = ui.available_width();
            for (activity, label) in choices {
                if big_list_button(ui, label, w, 48.0, true) {
                    app.on_activity(activity);
                    return;
                }
                ui.add_space(8.0);
            }
        });
    });
}
