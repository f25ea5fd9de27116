pub mod app;
pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod navigation;
pub mod roster;
pub mod ui;
pub mod view_models;

pub use app::KinderApp;
pub use error::{AppError, GateError};
pub use navigation::{NavigationState, Navigator, ProgressionGate, ProgressionState};
