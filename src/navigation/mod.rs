//! Máquina de estados de pantallas: avance por trimestre → semana → actividad,
//! botón "atrás" y desbloqueo progresivo.
//!
//! "Atrás" no es una pila de historial: depende solo de la pantalla actual
//! (ver [`back_transition`]).

use crate::error::GateError;
use crate::model::{ActivityId, QuarterId, Screen, WeekNumber};
use serde::{Deserialize, Serialize};

pub mod progress;

pub use progress::{ProgressionGate, ProgressionState};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_screen: Screen,
    pub selected_quarter: Option<QuarterId>,
    pub selected_week: Option<WeekNumber>,
    pub is_authenticated: bool,
}

/// Efecto secundario asociado a un paso hacia atrás.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackEffect {
    None,
    ClearWeek,
    ClearQuarter,
    Logout,
}

/// Tabla fija de "atrás": pantalla actual → (siguiente, efecto).
pub fn back_transition(current: Screen) -> (Screen, BackEffect) {
    match current {
        Screen::Weeks => (Screen::Quarters, BackEffect::ClearWeek),
        Screen::Activities => (Screen::Weeks, BackEffect::None),
        Screen::SingAlong | Screen::Qna | Screen::Storytelling => {
            (Screen::Activities, BackEffect::None)
        }
        Screen::Quarters => (Screen::Home, BackEffect::ClearQuarter),
        Screen::StudentsDashboard => (Screen::Home, BackEffect::Logout),
        Screen::Home => (Screen::Home, BackEffect::None),
        Screen::Login => (Screen::Home, BackEffect::None),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Navigator {
    state: NavigationState,
    gate: ProgressionGate,
}

impl Navigator {
    pub fn new(gate: ProgressionGate) -> Self {
        Self {
            state: NavigationState::default(),
            gate,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn gate(&self) -> &ProgressionGate {
        &self.gate
    }

    pub fn current_screen(&self) -> Screen {
        self.state.current_screen
    }

    pub fn selected_quarter(&self) -> Option<QuarterId> {
        self.state.selected_quarter
    }

    pub fn selected_week(&self) -> Option<WeekNumber> {
        self.state.selected_week
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    fn go_to(&mut self, screen: Screen) -> Screen {
        if self.state.current_screen != screen {
            log::debug!("screen {} -> {}", self.state.current_screen, screen);
        }
        self.state.current_screen = screen;
        screen
    }

    /// Botón "Play" de la portada.
    pub fn start_play(&mut self) -> Screen {
        self.go_to(Screen::Quarters)
    }

    pub fn select_quarter(&mut self, quarter: QuarterId) -> Result<Screen, GateError> {
        if !self.gate.is_quarter_unlocked(quarter) {
            log::debug!("{quarter} is locked");
            return Err(GateError::Locked);
        }
        self.state.selected_quarter = Some(quarter);
        if quarter == QuarterId::Q1 {
            self.gate.mark_quarter_one_visited();
        }
        Ok(self.go_to(Screen::Weeks))
    }

    /// Sin trimestre elegido no hay semana que elegir.
    pub fn select_week(&mut self, week: WeekNumber) -> Result<Screen, GateError> {
        if self.state.selected_quarter.is_none() {
            log::warn!("{week} selected without a quarter");
            return Err(GateError::Locked);
        }
        if !self.gate.is_week_unlocked(week) {
            log::debug!("{week} is locked");
            return Err(GateError::Locked);
        }
        self.state.selected_week = Some(week);
        self.gate.unlock_next(week);
        Ok(self.go_to(Screen::Activities))
    }

    /// Sin semana elegida la petición se ignora y se queda en la pantalla actual.
    pub fn select_activity(&mut self, activity: ActivityId) -> Screen {
        if self.state.selected_week.is_none() {
            log::warn!("activity {activity:?} selected without a week");
            return self.state.current_screen;
        }
        self.go_to(activity.screen())
    }

    pub fn login_succeeded(&mut self) -> Screen {
        self.state.is_authenticated = true;
        self.go_to(Screen::StudentsDashboard)
    }

    pub fn request_student_login(&mut self) -> Screen {
        self.go_to(Screen::Login)
    }

    /// Cierra la sesión del profesor. El progreso desbloqueado se conserva.
    pub fn logout(&mut self) -> Screen {
        self.state.is_authenticated = false;
        self.state.selected_quarter = None;
        self.state.selected_week = None;
        self.go_to(Screen::Home)
    }

    pub fn go_back(&mut self) -> Screen {
        let (next, effect) = back_transition(self.state.current_screen);
        match effect {
            BackEffect::None => {}
            BackEffect::ClearWeek => self.state.selected_week = None,
            // la semana no sobrevive a su trimestre
            BackEffect::ClearQuarter => {
                self.state.selected_quarter = None;
                self.state.selected_week = None;
            }
            BackEffect::Logout => return self.logout(),
        }
        self.go_to(next)
    }

    /// El botón "Back" solo aparece en el flujo de juego.
    pub fn shows_back_button(&self) -> bool {
        matches!(
            self.state.current_screen,
            Screen::Quarters
                | Screen::Weeks
                | Screen::Activities
                | Screen::SingAlong
                | Screen::Qna
                | Screen::Storytelling
        )
    }
}
