// src/config.rs

use crate::error::ConfigError;
use crate::roster::StudentDraft;
use serde::{Deserialize, Serialize};

/// Variable de entorno con la ruta a un `config.yaml` alternativo (solo nativo).
pub const CONFIG_ENV: &str = "KINDER_QUEST_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub teacher: TeacherConfig,
    #[serde(default)]
    pub roster: RosterConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeacherConfig {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RosterBackend {
    #[default]
    Memory,
    Firestore,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterConfig {
    #[serde(default)]
    pub backend: RosterBackend,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Alumnos iniciales para el backend en memoria
    #[serde(default)]
    pub seed: Vec<StudentDraft>,
}

fn default_collection() -> String {
    "students".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            backend: RosterBackend::Memory,
            project_id: String::new(),
            api_key: String::new(),
            collection: default_collection(),
            seed: vec![],
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Configuración embebida en el binario
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml_str(include_str!("data/config.yaml"))
    }

    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Usa el fichero de `KINDER_QUEST_CONFIG` si existe; si no, la embebida.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            log::info!("loading config from {path}");
            return Self::from_path(&path);
        }
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = AppConfig::embedded().expect("embedded config ok");
        assert_eq!(config.teacher.username, "teacher");
        assert_eq!(config.roster.backend, RosterBackend::Memory);
        assert_eq!(config.roster.collection, "students");
    }

    #[test]
    fn roster_section_is_optional() {
        let yaml = "title: Demo\nteacher:\n  username: a\n  password: b\n";
        let config = AppConfig::from_yaml_str(yaml).expect("yaml ok");
        assert_eq!(config.roster.backend, RosterBackend::Memory);
        assert!(config.roster.seed.is_empty());
    }

    #[test]
    fn firestore_backend_is_recognised() {
        let yaml = r#"
title: Demo
teacher: { username: a, password: b }
roster:
  backend: firestore
  project_id: my-project
  api_key: key
"#;
        let config = AppConfig::from_yaml_str(yaml).expect("yaml ok");
        assert_eq!(config.roster.backend, RosterBackend::Firestore);
        assert_eq!(config.roster.project_id, "my-project");
        assert_eq!(config.roster.collection, "students");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
