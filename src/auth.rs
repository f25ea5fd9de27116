use crate::config::TeacherConfig;
use crate::error::AuthError;

/// Comprueba las credenciales del profesor. La navegación nunca valida nada por sí misma.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// Compara contra el usuario y la contraseña configurados.
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(teacher: &TeacherConfig) -> Self {
        Self::new(teacher.username.clone(), teacher.password.clone())
    }
}

impl Authenticator for StaticAuthenticator {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if username == self.username && password == self.password {
            log::info!("teacher {username} logged in");
            Ok(())
        } else {
            log::info!("rejected login for {username}");
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> StaticAuthenticator {
        StaticAuthenticator::new("teacher", "password")
    }

    #[test]
    fn blank_fields_are_missing_credentials() {
        assert_eq!(auth().verify("  ", "password"), Err(AuthError::MissingCredentials));
        assert_eq!(auth().verify("teacher", ""), Err(AuthError::MissingCredentials));
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert_eq!(auth().verify("teacher", "nope"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn matching_credentials_pass() {
        assert_eq!(auth().verify("teacher", "password"), Ok(()));
    }
}
