mod helpers;
pub mod layout;
pub mod views;

use crate::app::KinderApp;
use crate::model::Screen;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for KinderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Resultados del almacén de alumnos que hayan llegado
        if self.dashboard.poll() {
            ctx.request_repaint();
        }
        if self.dashboard.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // BOTÓN "BACK" (solo en el flujo de juego)
        if self.navigator.shows_back_button() {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por pantalla a las funciones en views
        match self.navigator.current_screen() {
            Screen::Home => views::home::ui_home(self, ctx),
            Screen::Quarters => views::quarters::ui_quarters(self, ctx),
            Screen::Weeks => views::weeks::ui_weeks(self, ctx),
            Screen::Activities => views::activities::ui_activities(self, ctx),
            Screen::SingAlong | Screen::Qna | Screen::Storytelling => {
                views::activity::ui_activity(self, ctx)
            }
            Screen::Login => views::login::ui_login(self, ctx),
            Screen::StudentsDashboard => views::dashboard::ui_dashboard(self, ctx),
        }
    }
}
