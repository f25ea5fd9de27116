// src/view_models.rs

use crate::model::{QuarterId, WeekNumber};

#[derive(Clone, Debug)]
pub struct QuarterInfo {
    pub quarter: QuarterId,
    pub unlocked: bool,
}

#[derive(Clone, Debug)]
pub struct WeekInfo {
    pub week: WeekNumber,
    pub unlocked: bool,
    pub selected: bool, // última semana elegida
}

impl QuarterInfo {
    pub fn label(&self) -> String {
        if self.unlocked {
            format!("{}", self.quarter)
        } else {
            format!("{} 🔒", self.quarter)
        }
    }
}

impl WeekInfo {
    pub fn label(&self) -> String {
        if !self.unlocked {
            format!("{} 🔒", self.week)
        } else if self.selected {
            format!("{} ⭐", self.week)
        } else {
            format!("{} 🔓", self.week)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_show_lock_state() {
        let locked = QuarterInfo {
            quarter: QuarterId::Q2,
            unlocked: false,
        };
        assert_eq!(locked.label(), "Quarter 2 🔒");

        let week = WeekInfo {
            week: WeekNumber::FIRST,
            unlocked: true,
            selected: false,
        };
        assert_eq!(week.label(), "Week 1 🔓");
    }
}
