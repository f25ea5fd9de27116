use super::*;

#[derive(Default, Clone, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub message: String,
}

impl LoginForm {
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.message.clear();
    }
}

impl KinderApp {
    /// Valida el formulario de acceso; si es correcto entra al panel de alumnos.
    pub fn submit_login(&mut self) {
        let result = self
            .authenticator
            .verify(&self.login.username, &self.login.password);

        match result {
            Ok(()) => {
                self.login.clear();
                self.navigator.login_succeeded();
                self.dashboard.refresh();
                self.message.clear();
            }
            Err(e) => {
                // Se queda en Login para reintentar
                self.login.message = e.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::Screen;

    #[test]
    fn good_credentials_open_dashboard_with_students() {
        let mut app = app();
        app.on_student_scores();
        app.login.username = "teacher".into();
        app.login.password = "password".into();
        app.submit_login();

        assert_eq!(app.navigator.current_screen(), Screen::StudentsDashboard);
        assert!(app.navigator.is_authenticated());
        assert!(app.login.password.is_empty());
        app.dashboard.wait_idle();
        assert_eq!(app.dashboard.students.len(), 1);
    }

    #[test]
    fn bad_credentials_stay_on_login() {
        let mut app = app();
        app.on_student_scores();
        app.login.username = "teacher".into();
        app.login.password = "wrong".into();
        app.submit_login();

        assert_eq!(app.navigator.current_screen(), Screen::Login);
        assert!(!app.navigator.is_authenticated());
        assert_eq!(app.login.message, "Invalid username or password.");
    }

    #[test]
    fn blank_credentials_ask_for_both_fields() {
        let mut app = app();
        app.on_student_scores();
        app.submit_login();
        assert_eq!(app.login.message, "Please enter both username and password.");
    }
}
