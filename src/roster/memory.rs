use super::{RosterStore, StudentDraft, StudentRecord};
use crate::error::RosterError;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    next_id: u64,
    students: Vec<StudentRecord>,
}

/// Almacén en memoria del proceso. Sirve sin red y en los tests.
#[derive(Default)]
pub struct MemoryRoster {
    inner: Mutex<Inner>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(drafts: Vec<StudentDraft>) -> Self {
        let roster = Self::new();
        {
            let mut inner = roster.lock();
            for draft in drafts {
                let id = inner.allocate_id();
                inner.students.push(StudentRecord { id, data: draft });
            }
        }
        roster
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Cada operación es una sola mutación: un lock envenenado sigue siendo consistente
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Inner {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("student-{}", self.next_id)
    }
}

impl RosterStore for MemoryRoster {
    fn list(&self) -> Result<Vec<StudentRecord>, RosterError> {
        Ok(self.lock().students.clone())
    }

    fn create(&self, draft: &StudentDraft) -> Result<String, RosterError> {
        draft.validate()?;
        let mut inner = self.lock();
        let id = inner.allocate_id();
        inner.students.push(StudentRecord {
            id: id.clone(),
            data: draft.clone(),
        });
        Ok(id)
    }

    fn update(&self, id: &str, draft: &StudentDraft) -> Result<(), RosterError> {
        draft.validate()?;
        let mut inner = self.lock();
        let record = inner
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        record.data = draft.clone();
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), RosterError> {
        let mut inner = self.lock();
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        if inner.students.len() == before {
            return Err(RosterError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str) -> StudentDraft {
        StudentDraft {
            first_name: first.into(),
            last_name: "Doe".into(),
            ..StudentDraft::default()
        }
    }

    #[test]
    fn create_update_delete_cycle() {
        let roster = MemoryRoster::new();
        let id = roster.create(&draft("Ana")).expect("create");
        roster.update(&id, &draft("Anita")).expect("update");

        let students = roster.list().expect("list");
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].data.first_name, "Anita");

        roster.delete(&id).expect("delete");
        assert!(roster.list().expect("list").is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let roster = MemoryRoster::with_students(vec![draft("A"), draft("B")]);
        let id = roster.create(&draft("C")).expect("create");
        let students = roster.list().expect("list");
        assert_eq!(students.len(), 3);
        assert_eq!(students.iter().filter(|s| s.id == id).count(), 1);
    }

    #[test]
    fn missing_ids_are_not_found() {
        let roster = MemoryRoster::new();
        assert!(matches!(roster.update("x", &draft("A")), Err(RosterError::NotFound(_))));
        assert!(matches!(roster.delete("x"), Err(RosterError::NotFound(_))));
    }
}
