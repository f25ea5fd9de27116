use super::*;
use crate::model::{ActivityId, QuarterId, Screen, WeekNumber};

impl KinderApp {
    /// Botón "Play" de la portada
    pub fn on_play(&mut self) {
        self.navigator.start_play();
        self.message.clear();
    }

    pub fn on_quarter(&mut self, quarter: QuarterId) {
        match self.navigator.select_quarter(quarter) {
            Ok(_) => self.message.clear(),
            Err(_) => self.message = "🔒 Play Quarter 1 first!".to_owned(),
        }
    }

    pub fn on_week(&mut self, week: WeekNumber) {
        match self.navigator.select_week(week) {
            Ok(_) => self.message.clear(),
            Err(_) => self.message = "🔒 Finish the week before this one first!".to_owned(),
        }
    }

    pub fn on_activity(&mut self, activity: ActivityId) {
        self.navigator.select_activity(activity);
        self.message.clear();
    }

    /// Botón "Student Scores": abre el acceso del profesor
    pub fn on_student_scores(&mut self) {
        self.login.clear();
        self.navigator.request_student_login();
        self.message.clear();
    }

    pub fn on_back(&mut self) {
        let was_dashboard = self.navigator.current_screen() == Screen::StudentsDashboard;
        self.navigator.go_back();
        if was_dashboard {
            self.dashboard.clear();
        }
        self.message.clear();
    }

    pub fn on_logout(&mut self) {
        self.navigator.logout();
        self.dashboard.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::{ActivityId, QuarterId, Screen, WeekNumber};

    fn week(n: u8) -> WeekNumber {
        WeekNumber::new(n).expect("valid week")
    }

    #[test]
    fn locked_quarter_only_sets_a_message() {
        let mut app = app();
        app.on_play();
        app.on_quarter(QuarterId::Q3);
        assert_eq!(app.navigator.current_screen(), Screen::Quarters);
        assert!(!app.message.is_empty());

        app.on_quarter(QuarterId::Q1);
        assert_eq!(app.navigator.current_screen(), Screen::Weeks);
        assert!(app.message.is_empty());
    }

    #[test]
    fn locked_week_keeps_the_weeks_screen() {
        let mut app = app();
        app.on_play();
        app.on_quarter(QuarterId::Q1);
        app.on_week(week(2));
        assert_eq!(app.navigator.current_screen(), Screen::Weeks);
        assert_eq!(app.navigator.selected_week(), None);
        assert!(!app.message.is_empty());
    }

    #[test]
    fn full_play_round_trip() {
        let mut app = app();
        app.on_play();
        app.on_quarter(QuarterId::Q1);
        app.on_week(week(1));
        app.on_activity(ActivityId::Qna);
        assert_eq!(app.navigator.current_screen(), Screen::Qna);

        for expected in [Screen::Activities, Screen::Weeks, Screen::Quarters, Screen::Home] {
            app.on_back();
            assert_eq!(app.navigator.current_screen(), expected);
        }
        assert!(app.navigator.gate().is_week_unlocked(week(2)));
    }

    #[test]
    fn leaving_dashboard_clears_roster() {
        let mut app = app();
        app.navigator.login_succeeded();
        app.dashboard.refresh();
        app.dashboard.wait_idle();
        assert!(!app.dashboard.students.is_empty());

        app.on_back();
        assert_eq!(app.navigator.current_screen(), Screen::Home);
        assert!(!app.navigator.is_authenticated());
        assert!(app.dashboard.students.is_empty());
    }

    #[test]
    fn logout_button_returns_home() {
        let mut app = app();
        app.navigator.login_succeeded();
        app.on_logout();
        assert_eq!(app.navigator.current_screen(), Screen::Home);
        assert!(!app.navigator.is_authenticated());
    }
}
