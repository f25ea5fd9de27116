use thiserror::Error;

/// Única falla de la navegación: el destino todavía está bloqueado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("selection is locked")]
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both username and password.")]
    MissingCredentials,

    #[error("Invalid username or password.")]
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster request failed: {0}")]
    Http(String),

    #[error("roster backend answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid roster document: {0}")]
    Decode(String),

    #[error("student {0} not found")]
    NotFound(String),

    #[error("invalid student: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errores al arrancar la aplicación.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("activity catalog error: {0}")]
    Content(serde_yaml::Error),
}
