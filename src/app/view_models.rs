use super::*;
use crate::model::{ActivityId, QuarterId, WeekNumber};

impl KinderApp {
    pub fn quarter_infos(&self) -> Vec<QuarterInfo> {
        let gate = self.navigator.gate();
        QuarterId::ALL
            .iter()
            .map(|&quarter| QuarterInfo {
                quarter,
                unlocked: gate.is_quarter_unlocked(quarter),
            })
            .collect()
    }

    pub fn week_infos(&self) -> Vec<WeekInfo> {
        let gate = self.navigator.gate();
        let selected = self.navigator.selected_week();
        WeekNumber::all()
            .map(|week| WeekInfo {
                week,
                unlocked: gate.is_week_unlocked(week),
                selected: selected == Some(week),
            })
            .collect()
    }

    /// Texto de la actividad actual según la semana elegida.
    pub fn activity_text(&self) -> Option<(&str, &str, &str)> {
        let activity = ActivityId::from_screen(self.navigator.current_screen())?;
        let week = self.navigator.selected_week()?;
        let content = self.catalog.get(activity);
        let item = content.item_for_week(week)?;
        Some((content.icon.as_str(), content.title.as_str(), item))
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::{ActivityId, QuarterId, WeekNumber};

    #[test]
    fn infos_follow_the_gate() {
        let mut app = app();
        assert_eq!(app.quarter_infos().iter().filter(|q| q.unlocked).count(), 1);
        assert_eq!(app.week_infos().iter().filter(|w| w.unlocked).count(), 1);

        app.on_quarter(QuarterId::Q1);
        app.on_week(WeekNumber::FIRST);
        assert!(app.quarter_infos().iter().all(|q| q.unlocked));

        let weeks = app.week_infos();
        assert_eq!(weeks.iter().filter(|w| w.unlocked).count(), 2);
        assert!(weeks[0].selected);
    }

    #[test]
    fn activity_text_needs_an_activity_screen() {
        let mut app = app();
        assert!(app.activity_text().is_none());
        app.on_quarter(QuarterId::Q1);
        app.on_week(WeekNumber::FIRST);
        app.on_activity(ActivityId::SingAlong);
        let (_, title, item) = app.activity_text().expect("activity text");
        assert_eq!(title, "Sing Along");
        assert!(item.starts_with("Twinkle"));
    }
}
