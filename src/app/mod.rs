use crate::auth::{Authenticator, StaticAuthenticator};
use crate::config::AppConfig;
use crate::content::ActivityCatalog;
use crate::error::AppError;
use crate::navigation::Navigator;
use crate::roster::{RosterStore, build_store};
use std::sync::Arc;

// Submódulos
pub mod dashboard;
pub mod login;
pub mod navigation;
pub mod view_models;

pub use dashboard::RosterDashboard;
pub use login::LoginForm;

// Re-export de view models
pub use crate::view_models::{QuarterInfo, WeekInfo};

pub struct KinderApp {
    pub title: String,
    pub navigator: Navigator,
    pub login: LoginForm,
    pub dashboard: RosterDashboard,
    pub catalog: ActivityCatalog,
    pub message: String,
    authenticator: Box<dyn Authenticator>,
}

impl KinderApp {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let catalog = ActivityCatalog::embedded().map_err(AppError::Content)?;
        let store = build_store(&config.roster);
        log::info!("roster backend: {:?}", config.roster.backend);

        Ok(Self::with_parts(
            config.title.clone(),
            Box::new(StaticAuthenticator::from_config(&config.teacher)),
            store,
            catalog,
        ))
    }

    /// Construye la app con colaboradores explícitos (útil en tests)
    pub fn with_parts(
        title: String,
        authenticator: Box<dyn Authenticator>,
        store: Arc<dyn RosterStore>,
        catalog: ActivityCatalog,
    ) -> Self {
        Self {
            title,
            navigator: Navigator::default(),
            login: LoginForm::default(),
            dashboard: RosterDashboard::new(store),
            catalog,
            message: String::new(),
            authenticator,
        }
    }
}
