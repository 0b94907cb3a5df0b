use crate::catalog::{Catalog, CatalogError};
use crate::config::Config;
use crate::judge::{Evaluator, evaluator_for};
use crate::model::{AppState, SideTab};
use crate::progress::ProgressTracker;
use crate::storage::{KeyValueStore, MemoryStore};
use egui_commonmark::CommonMarkCache;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;

// Re-export de view models
pub use crate::view_models::{ExerciseCard, ProgressSummary, SidebarEntry};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvaluationKind {
    Run,
    Test,
}

/// Ejecución simulada en curso; se resuelve cuando el reloj de egui
/// alcanza `ready_at` (segundos).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PendingEvaluation {
    pub kind: EvaluationKind,
    pub ready_at: f64,
}

/// Estado transitorio de la vista de un ejercicio. No se persiste:
/// volver al listado lo descarta.
#[derive(Clone, Debug)]
pub struct ExerciseSession {
    pub exercise_id: String,
    pub code: String,
    pub step: usize,
    pub tab: SideTab,
    pub output: String,
    pub pending: Option<PendingEvaluation>,
    pub search_query: String,
    pub search_results: Vec<String>,
}

impl ExerciseSession {
    pub fn new(exercise_id: &str, initial_code: &str) -> Self {
        Self {
            exercise_id: exercise_id.to_string(),
            code: initial_code.to_string(),
            step: 0,
            tab: SideTab::default(),
            output: String::new(),
            pending: None,
            search_query: String::new(),
            search_results: Vec::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

pub struct PrepApp {
    pub catalog: Catalog,
    pub tracker: ProgressTracker,
    pub evaluator: Box<dyn Evaluator>,
    pub config: Config,
    pub state: AppState,
    pub search: String,
    pub session: Option<ExerciseSession>,
    pub message: String,
    pub cm_cache: CommonMarkCache,
}

impl PrepApp {
    pub fn new(
        catalog: Catalog,
        tracker: ProgressTracker,
        evaluator: Box<dyn Evaluator>,
        config: Config,
    ) -> Self {
        Self {
            catalog,
            tracker,
            evaluator,
            config,
            state: AppState::ExerciseList,
            search: String::new(),
            session: None,
            message: String::new(),
            cm_cache: CommonMarkCache::default(),
        }
    }

    /// Arranque normal: catálogo embebido + almacén de la plataforma
    pub fn from_config(config: Config) -> Result<Self, CatalogError> {
        let catalog = Catalog::embedded()?;
        let tracker = ProgressTracker::load(open_store(&config), config.storage_key.clone());
        let evaluator = evaluator_for(&config);
        Ok(Self::new(catalog, tracker, evaluator, config))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    use crate::storage::FileStore;

    match &config.data_dir {
        Some(dir) => {
            log::info!("progreso en {}", dir.display());
            Box::new(FileStore::new(dir))
        }
        None => {
            log::warn!("sin directorio de datos: el progreso sólo vivirá en memoria");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn open_store(_config: &Config) -> Box<dyn KeyValueStore> {
    use crate::storage::LocalStorageStore;

    if LocalStorageStore::is_available() {
        Box::new(LocalStorageStore)
    } else {
        log::warn!("localStorage no disponible: el progreso sólo vivirá en memoria");
        Box::new(MemoryStore::new())
    }
}
