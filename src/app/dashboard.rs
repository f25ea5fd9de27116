use crate::error::RosterError;
use crate::roster::{RosterStore, StudentDraft, StudentRecord};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

type RosterJobResult = Result<Vec<StudentRecord>, RosterError>;

struct PendingJob {
    seq: u64,
    rx: Receiver<RosterJobResult>,
}

/// Estado del panel de alumnos: lista, formulario y peticiones en curso.
///
/// Cada llamada al almacén corre fuera del hilo de la UI y termina
/// volviendo a pedir la lista; el resultado se recoge con [`RosterDashboard::poll`].
pub struct RosterDashboard {
    store: Arc<dyn RosterStore>,
    pub students: Vec<StudentRecord>,
    pub form: StudentDraft,
    pub editing: Option<String>,
    pub show_form: bool,
    pub error: Option<String>,
    pending: Vec<PendingJob>,
    next_seq: u64,
    applied_seq: u64,
}

impl RosterDashboard {
    pub fn new(store: Arc<dyn RosterStore>) -> Self {
        Self {
            store,
            students: vec![],
            form: StudentDraft::default(),
            editing: None,
            show_form: false,
            error: None,
            pending: vec![],
            next_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn refresh(&mut self) {
        self.spawn(|store| store.list());
    }

    pub fn open_add_form(&mut self) {
        self.reset_form();
        self.show_form = true;
    }

    /// Rellena el formulario con los datos del alumno a editar
    pub fn begin_edit(&mut self, record: &StudentRecord) {
        self.editing = Some(record.id.clone());
        self.form = record.data.clone();
        self.show_form = true;
    }

    pub fn reset_form(&mut self) {
        self.form = StudentDraft::default();
        self.editing = None;
        self.show_form = false;
    }

    /// Crea o actualiza según haya un alumno en edición.
    pub fn submit(&mut self) {
        if let Err(e) = self.form.validate() {
            self.error = Some(e.to_string());
            return;
        }
        let draft = self.form.clone();
        match self.editing.clone() {
            Some(id) => self.spawn(move |store| {
                store.update(&id, &draft)?;
                store.list()
            }),
            None => self.spawn(move |store| {
                store.create(&draft)?;
                store.list()
            }),
        }
        self.reset_form();
    }

    pub fn delete(&mut self, id: &str) {
        let id = id.to_string();
        self.spawn(move |store| {
            store.delete(&id)?;
            store.list()
        });
    }

    /// Al cerrar sesión no queda nada del profesor en pantalla.
    pub fn clear(&mut self) {
        self.students.clear();
        self.reset_form();
        self.error = None;
        self.pending.clear();
        self.applied_seq = self.next_seq;
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce(&dyn RosterStore) -> RosterJobResult + Send + 'static,
    {
        self.next_seq += 1;
        let store = Arc::clone(&self.store);
        let (tx, rx) = mpsc::channel::<RosterJobResult>();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let _ = tx.send(job(store.as_ref()));
        });

        // En web solo hay backend en memoria: se resuelve al momento
        #[cfg(target_arch = "wasm32")]
        {
            let _ = tx.send(job(store.as_ref()));
        }

        self.pending.push(PendingJob {
            seq: self.next_seq,
            rx,
        });
    }

    /// Recoge los resultados terminados. Devuelve `true` si algo cambió.
    pub fn poll(&mut self) -> bool {
        let mut finished = vec![];
        self.pending.retain(|job| match job.rx.try_recv() {
            Ok(result) => {
                finished.push((job.seq, result));
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                log::warn!("roster job {} ended without a result", job.seq);
                false
            }
        });
        let changed = !finished.is_empty();
        for (seq, result) in finished {
            self.apply(seq, result);
        }
        changed
    }

    fn apply(&mut self, seq: u64, result: RosterJobResult) {
        match result {
            // Una lista más vieja que la ya mostrada no la pisa
            Ok(students) if seq > self.applied_seq => {
                self.applied_seq = seq;
                self.students = students;
                self.error = None;
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("roster request {seq} failed: {e}");
                // tampoco un fallo viejo tapa una lista más nueva
                if seq > self.applied_seq {
                    self.error = Some(e.to_string());
                }
            }
        }
    }

    /// Espera a que terminen todas las peticiones en curso.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait_idle(&mut self) {
        for job in std::mem::take(&mut self.pending) {
            match job.rx.recv() {
                Ok(result) => self.apply(job.seq, result),
                Err(_) => log::warn!("roster job {} ended without a result", job.seq),
            }
        }
    }
}
