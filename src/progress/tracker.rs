use super::ProgressState;
use crate::storage::KeyValueStore;

/// Clave fija del registro de progreso
pub const STATS_KEY: &str = "forloopprep-stats";

/// Dueño único del estado de progreso. Sólo `record_attempt` y
/// `mark_completed` lo modifican; cada cambio se vuelca entero al almacén.
pub struct ProgressTracker {
    state: ProgressState,
    store: Box<dyn KeyValueStore>,
    key: String,
    write_failed: bool,
}

impl ProgressTracker {
    /// Hidrata desde el almacén. Un registro ausente, ilegible o inválido
    /// deja el estado por defecto; nunca falla.
    pub fn load(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match store.read(&key) {
            Ok(Some(raw)) => match ProgressState::from_record(&raw) {
                Ok(state) => {
                    log::info!(
                        "progreso restaurado: {} completados, {} intentos",
                        state.completed,
                        state.attempted
                    );
                    state
                }
                Err(err) => {
                    log::warn!("registro de progreso descartado ({key}): {err}");
                    ProgressState::default()
                }
            },
            Ok(None) => {
                log::debug!("sin progreso guardado en {key}");
                ProgressState::default()
            }
            Err(err) => {
                log::warn!("no se pudo leer el progreso ({key}): {err}");
                ProgressState::default()
            }
        };

        Self {
            state,
            store,
            key,
            write_failed: false,
        }
    }

    pub fn snapshot(&self) -> ProgressState {
        self.state.clone()
    }

    pub fn completed(&self) -> u64 {
        self.state.completed
    }

    pub fn attempted(&self) -> u64 {
        self.state.attempted
    }

    pub fn attempts_for(&self, id: &str) -> u64 {
        self.state.attempts_for(id)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.state.is_completed(id)
    }

    /// `true` si la última escritura falló (la sesión sigue en memoria)
    pub fn persistence_degraded(&self) -> bool {
        self.write_failed
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn into_store(self) -> Box<dyn KeyValueStore> {
        self.store
    }

    /// Suma un intento al ejercicio (lo crea a 1 si no existía).
    /// Devuelve el nuevo número de intentos de ese ejercicio. Con un
    /// contador ya en `u64::MAX` el intento no se registra.
    pub fn record_attempt(&mut self, id: &str) -> u64 {
        let current = self.state.attempts_for(id);
        let (Some(count), Some(attempted)) =
            (current.checked_add(1), self.state.attempted.checked_add(1))
        else {
            log::warn!("contador de intentos al máximo: intento en {id} no registrado");
            return current;
        };
        self.state.exercise_attempts.insert(id.to_string(), count);
        self.state.attempted = attempted;
        log::debug!("intento #{count} en {id}");
        self.persist();
        count
    }

    /// Marca el ejercicio como completado. Si ya lo estaba no cambia nada y
    /// devuelve `false`.
    pub fn mark_completed(&mut self, id: &str) -> bool {
        if self.state.is_completed(id) {
            return false;
        }
        self.state.completed_exercises.push(id.to_string());
        self.state.completed += 1;
        log::debug!("completado {id} ({} en total)", self.state.completed);
        self.persist();
        true
    }

    /// Reescribe el estado actual (cierre de la app / autoguardado de eframe)
    pub fn flush(&mut self) {
        self.persist();
    }

    fn persist(&mut self) {
        let record = match self.state.to_record() {
            Ok(record) => record,
            Err(err) => {
                log::warn!("no se pudo serializar el progreso: {err}");
                self.write_failed = true;
                return;
            }
        };
        match self.store.write(&self.key, &record) {
            Ok(()) => self.write_failed = false,
            Err(err) => {
                log::warn!("no se pudo guardar el progreso ({}): {err}", self.key);
                self.write_failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingStore {
        inner: MemoryStore,
        writes: Rc<Cell<usize>>,
    }

    impl KeyValueStore for CountingStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            self.inner.write(key, value)
        }
    }

    struct BrokenReadStore;

    impl KeyValueStore for BrokenReadStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("sin disco".into()))
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn fresh() -> ProgressTracker {
        ProgressTracker::load(Box::new(MemoryStore::new()), STATS_KEY)
    }

    fn stored_state(tracker: &ProgressTracker) -> ProgressState {
        let raw = tracker
            .store()
            .read(STATS_KEY)
            .expect("lectura")
            .expect("registro escrito");
        ProgressState::from_record(&raw).expect("registro válido")
    }

    #[test]
    fn fresh_tracker_starts_empty() {
        let state = fresh().snapshot();
        assert_eq!(state.completed, 0);
        assert_eq!(state.attempted, 0);
        assert!(state.exercise_attempts.is_empty());
        assert!(state.completed_exercises.is_empty());
    }

    #[test]
    fn single_attempt_on_string_reversal() {
        let mut tracker = fresh();
        assert_eq!(tracker.record_attempt("string-reversal"), 1);

        let state = tracker.snapshot();
        assert_eq!(state.exercise_attempts.get("string-reversal"), Some(&1));
        assert_eq!(state.attempted, 1);
        assert_eq!(state.completed, 0);
    }

    #[test]
    fn attempts_are_counted_per_exercise_and_globally() {
        let mut tracker = fresh();
        let calls = ["a", "b", "a", "c", "a", "b"];
        for id in calls {
            tracker.record_attempt(id);
        }
        assert_eq!(tracker.attempted(), calls.len() as u64);
        for id in ["a", "b", "c"] {
            let expected = calls.iter().filter(|c| **c == id).count() as u64;
            assert_eq!(tracker.attempts_for(id), expected);
        }
        assert_eq!(tracker.attempts_for("never"), 0);
        assert!(tracker.snapshot().validate().is_ok());
    }

    #[test]
    fn marking_twice_is_the_same_as_once() {
        let mut tracker = fresh();
        assert!(tracker.mark_completed("todo-app"));
        let once = tracker.snapshot();
        assert!(!tracker.mark_completed("todo-app"));
        let twice = tracker.snapshot();

        assert_eq!(once, twice);
        assert_eq!(twice.completed, 1);
        assert_eq!(twice.completed_exercises, vec!["todo-app".to_string()]);
    }

    #[test]
    fn repeated_completion_does_not_write() {
        let writes = Rc::new(Cell::new(0));
        let store = CountingStore {
            inner: MemoryStore::new(),
            writes: Rc::clone(&writes),
        };
        let mut tracker = ProgressTracker::load(Box::new(store), STATS_KEY);

        tracker.mark_completed("quiz-app");
        tracker.mark_completed("quiz-app");
        assert_eq!(writes.get(), 1);

        tracker.record_attempt("quiz-app");
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn every_mutation_rewrites_the_full_record() {
        let mut tracker = fresh();
        tracker.record_attempt("phone-book");
        assert_eq!(stored_state(&tracker), tracker.snapshot());

        tracker.mark_completed("phone-book");
        assert_eq!(stored_state(&tracker), tracker.snapshot());
        assert_eq!(stored_state(&tracker).completed, 1);
    }

    #[test]
    fn state_survives_a_reload() {
        let mut tracker = fresh();
        tracker.record_attempt("tic-tac-toe");
        tracker.record_attempt("tic-tac-toe");
        tracker.mark_completed("tic-tac-toe");
        let before = tracker.snapshot();

        let reloaded = ProgressTracker::load(tracker.into_store(), STATS_KEY);
        assert_eq!(reloaded.snapshot(), before);
    }

    #[test]
    fn corrupted_record_loads_as_default() {
        let store = MemoryStore::with_entry(STATS_KEY, "{{{ not json");
        let tracker = ProgressTracker::load(Box::new(store), STATS_KEY);
        assert_eq!(tracker.snapshot(), fresh().snapshot());
    }

    #[test]
    fn unreadable_store_loads_as_default() {
        let tracker = ProgressTracker::load(Box::new(BrokenReadStore), STATS_KEY);
        assert_eq!(tracker.snapshot(), ProgressState::default());
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut tracker = ProgressTracker::load(Box::new(MemoryStore::failing()), STATS_KEY);
        tracker.record_attempt("counter-component");
        assert!(tracker.mark_completed("counter-component"));
        assert!(tracker.persistence_degraded());
        assert_eq!(tracker.attempts_for("counter-component"), 1);
        assert!(tracker.is_completed("counter-component"));
    }

    #[test]
    fn unknown_ids_get_fresh_entries() {
        let mut tracker = fresh();
        tracker.record_attempt("not-in-catalog");
        assert!(tracker.mark_completed("not-in-catalog"));
        assert_eq!(tracker.attempts_for("not-in-catalog"), 1);
        assert!(tracker.is_completed("not-in-catalog"));
    }

    #[test]
    fn snapshot_is_a_detached_copy() {
        let mut tracker = fresh();
        let mut copy = tracker.snapshot();
        copy.completed = 99;
        copy.completed_exercises.push("x".into());
        assert_eq!(tracker.completed(), 0);

        tracker.record_attempt("a");
        assert_eq!(copy.attempted, 0);
    }

    #[test]
    fn saturated_counters_refuse_new_attempts() {
        let raw = format!(
            r#"{{"completed":0,"attempted":{max},"exerciseAttempts":{{"a":{max}}},"completedExercises":[]}}"#,
            max = u64::MAX
        );
        let store = CountingStore {
            inner: MemoryStore::with_entry(STATS_KEY, &raw),
            writes: Rc::new(Cell::new(0)),
        };
        let writes = store.writes.clone();
        let mut tracker = ProgressTracker::load(Box::new(store), STATS_KEY);
        assert_eq!(tracker.attempted(), u64::MAX);

        assert_eq!(tracker.record_attempt("b"), 0);
        assert_eq!(tracker.record_attempt("a"), u64::MAX);

        let state = tracker.snapshot();
        assert_eq!(state.attempted, u64::MAX);
        assert_eq!(state.attempts_for("b"), 0);
        assert!(!state.exercise_attempts.contains_key("b"));
        assert!(state.validate().is_ok());
        assert_eq!(writes.get(), 0);
    }
}
