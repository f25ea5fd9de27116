use crate::KinderApp;
use crate::roster::StudentRecord;
use egui::{
    Button, CentralPanel, Color32, Context, Grid, Image, RichText, ScrollArea, SidePanel, Spinner,
    TextEdit, Vec2,
};

const AVATAR_SIZE: f32 = 40.0;

enum RowAction {
    Edit(StudentRecord),
    Delete(String),
}

pub fn ui_dashboard(app: &mut KinderApp, ctx: &Context) {
    SidePanel::left("dashboard_sidebar")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.heading("🏫 Teacher");
            ui.add_space(16.0);
            let w = ui.available_width();
            if ui
                .add_sized([w, 34.0], Button::new("➕ Add Student").fill(Color32::DARK_GREEN))
                .clicked()
            {
                app.dashboard.open_add_form();
            }
            ui.add_space(8.0);
            if ui.add_sized([w, 30.0], Button::new("🔄 Refresh")).clicked() {
                app.dashboard.refresh();
            }
            ui.add_space(8.0);
            if ui
                .add_sized([w, 34.0], Button::new("🚪 Logout").fill(Color32::DARK_RED))
                .clicked()
            {
                app.on_logout();
            }
        });

    CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Students");
            if app.dashboard.is_busy() {
                ui.add(Spinner::new());
            }
        });
        if let Some(err) = &app.dashboard.error {
            ui.label(RichText::new(format!("⚠ {err}")).color(Color32::LIGHT_RED));
        }
        ui.separator();

        if app.dashboard.show_form {
            student_form(app, ui);
            ui.separator();
        }

        let mut action = None;
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            if app.dashboard.students.is_empty() {
                ui.label("No students yet.");
                return;
            }
            Grid::new("students_grid")
                .striped(true)
                .num_columns(4)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for student in &app.dashboard.students {
                        avatar(ui, student);
                        ui.label(RichText::new(student.full_name()).strong());
                        if ui.button("✏ Edit").clicked() {
                            action = Some(RowAction::Edit(student.clone()));
                        }
                        if ui.button("🗑 Delete").clicked() {
                            action = Some(RowAction::Delete(student.id.clone()));
                        }
                        ui.end_row();
                    }
                });
        });

        match action {
            Some(RowAction::Edit(record)) => app.dashboard.begin_edit(&record),
            Some(RowAction::Delete(id)) => app.dashboard.delete(&id),
            None => {}
        }
    });
}

fn avatar(ui: &mut egui::Ui, student: &StudentRecord) {
    let size = Vec2::splat(AVATAR_SIZE);
    match student.avatar_uri() {
        Some(uri) => {
            ui.add(Image::new(uri).fit_to_exact_size(size));
        }
        None => {
            ui.add_sized(size, egui::Label::new(RichText::new("🧒").size(AVATAR_SIZE * 0.7)));
        }
    }
}

fn student_form(app: &mut KinderApp, ui: &mut egui::Ui) {
    let title = if app.dashboard.editing.is_some() {
        "Edit Student"
    } else {
        "Add Student"
    };
    ui.strong(title);
    ui.add_space(6.0);

    let form = &mut app.dashboard.form;
    Grid::new("student_form").num_columns(2).show(ui, |ui| {
        ui.label("First name");
        ui.add(TextEdit::singleline(&mut form.first_name));
        ui.end_row();
        ui.label("Middle name");
        ui.add(TextEdit::singleline(&mut form.middle_name));
        ui.end_row();
        ui.label("Last name");
        ui.add(TextEdit::singleline(&mut form.last_name));
        ui.end_row();
        ui.label("Image URL");
        ui.add(TextEdit::singleline(&mut form.img));
        ui.end_row();
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("💾 Save").clicked() {
            app.dashboard.submit();
        }
        if ui.button("Cancel").clicked() {
            app.dashboard.reset_form();
        }
    });
}
