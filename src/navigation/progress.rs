use crate::model::{QuarterId, WeekNumber};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProgressionState {
    pub quarter_one_visited: bool,
    pub unlocked_weeks: BTreeSet<WeekNumber>, // siempre {1..=k}, sin huecos
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            quarter_one_visited: false,
            unlocked_weeks: BTreeSet::from([WeekNumber::FIRST]), // Solo semana 1 desbloqueada
        }
    }
}

/// Estado de desbloqueo de trimestres y semanas durante la sesión.
#[derive(Clone, Debug, Default)]
pub struct ProgressionGate {
    state: ProgressionState,
}

impl ProgressionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn is_quarter_unlocked(&self, quarter: QuarterId) -> bool {
        match quarter {
            QuarterId::Q1 => true,
            QuarterId::Q2 | QuarterId::Q3 | QuarterId::Q4 => self.state.quarter_one_visited,
        }
    }

    pub fn mark_quarter_one_visited(&mut self) {
        if !self.state.quarter_one_visited {
            log::debug!("quarter 1 visited, unlocking quarters 2-4");
        }
        self.state.quarter_one_visited = true;
    }

    pub fn is_week_unlocked(&self, week: WeekNumber) -> bool {
        self.state.unlocked_weeks.contains(&week)
    }

    /// Desbloquea la semana siguiente a `week` (no-op en la semana 10).
    pub fn unlock_next(&mut self, week: WeekNumber) {
        if let Some(next) = week.next() {
            if self.state.unlocked_weeks.insert(next) {
                log::debug!("unlocked {next}");
            }
        }
    }

    pub fn highest_unlocked_week(&self) -> WeekNumber {
        self.state
            .unlocked_weeks
            .last()
            .copied()
            .unwrap_or(WeekNumber::FIRST)
    }
}
