use crate::KinderApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, Key, RichText, TextEdit};

pub fn ui_login(app: &mut KinderApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 360.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("👩‍🏫 Teacher Login");
            ui.add_space(16.0);

            let w = ui.available_width();
            ui.add_sized(
                [w, 32.0],
                TextEdit::singleline(&mut app.login.username).hint_text("Username"),
            );
            ui.add_space(8.0);
            let pass = ui.add_sized(
                [w, 32.0],
                TextEdit::singleline(&mut app.login.password)
                    .password(true)
                    .hint_text("Password"),
            );
            ui.add_space(12.0);

            let enter = pass.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.add_sized([w, 36.0], Button::new("Login")).clicked() || enter {
                app.submit_login();
            }
            ui.add_space(6.0);
            if ui.add_sized([w, 30.0], Button::new("Cancel")).clicked() {
                app.on_back();
            }

            if !app.login.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.login.message).color(Color32::LIGHT_RED));
            }
        });
    });
}
