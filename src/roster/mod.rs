//! Lista de alumnos del profesor, guardada en un almacén externo de documentos.

use crate::config::{RosterBackend, RosterConfig};
use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
pub mod firestore;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use firestore::FirestoreRoster;
pub use memory::MemoryRoster;

/// Datos editables de un alumno (el formulario del panel).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub img: String,
}

impl StudentDraft {
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err(RosterError::Invalid("a student needs a first or last name".into()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    #[serde(flatten)]
    pub data: StudentDraft,
}

impl StudentRecord {
    pub fn full_name(&self) -> String {
        [&self.data.first_name, &self.data.middle_name, &self.data.last_name]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// URL de la foto, si el profesor cargó una.
    pub fn avatar_uri(&self) -> Option<&str> {
        Some(self.data.img.trim()).filter(|uri| !uri.is_empty())
    }
}

/// Operaciones CRUD sobre la colección de alumnos. Cada llamada puede fallar por separado.
pub trait RosterStore: Send + Sync {
    fn list(&self) -> Result<Vec<StudentRecord>, RosterError>;
    /// Devuelve el id asignado
    fn create(&self, draft: &StudentDraft) -> Result<String, RosterError>;
    fn update(&self, id: &str, draft: &StudentDraft) -> Result<(), RosterError>;
    fn delete(&self, id: &str) -> Result<(), RosterError>;
}

/// Construye el backend configurado.
pub fn build_store(config: &RosterConfig) -> Arc<dyn RosterStore> {
    match config.backend {
        RosterBackend::Memory => Arc::new(MemoryRoster::with_students(config.seed.clone())),
        #[cfg(not(target_arch = "wasm32"))]
        RosterBackend::Firestore => Arc::new(FirestoreRoster::new(
            &config.project_id,
            &config.api_key,
            &config.collection,
        )),
        #[cfg(target_arch = "wasm32")]
        RosterBackend::Firestore => {
            log::warn!("firestore roster is not available on web, using memory");
            Arc::new(MemoryRoster::with_students(config.seed.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, middle: &str, last: &str) -> StudentDraft {
        StudentDraft {
            first_name: first.into(),
            middle_name: middle.into(),
            last_name: last.into(),
            img: String::new(),
        }
    }

    #[test]
    fn full_name_skips_empty_parts() {
        let record = StudentRecord {
            id: "1".into(),
            data: draft("Ana", " ", "Reyes"),
        };
        assert_eq!(record.full_name(), "Ana Reyes");
    }

    #[test]
    fn blank_image_means_no_avatar() {
        let mut record = StudentRecord {
            id: "1".into(),
            data: draft("Ana", "", "Reyes"),
        };
        assert_eq!(record.avatar_uri(), None);
        record.data.img = "   ".into();
        assert_eq!(record.avatar_uri(), None);
        record.data.img = " https://example.org/ana.png ".into();
        assert_eq!(record.avatar_uri(), Some("https://example.org/ana.png"));
    }

    #[test]
    fn nameless_draft_is_invalid() {
        assert!(matches!(draft("", "Luis", " ").validate(), Err(RosterError::Invalid(_))));
        assert!(draft("Ana", "", "").validate().is_ok());
    }

    #[test]
    fn record_uses_document_field_names() {
        let record = StudentRecord {
            id: "abc".into(),
            data: draft("Ana", "", "Reyes"),
        };
        let json = serde_json::to_value(&record).expect("json ok");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["lastName"], "Reyes");
    }

    #[test]
    fn memory_backend_is_seeded_from_config() {
        let config = RosterConfig {
            seed: vec![draft("Ana", "", "Reyes")],
            ..RosterConfig::default()
        };
        let store = build_store(&config);
        let students = store.list().expect("memory list");
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].data.first_name, "Ana");
    }
}
