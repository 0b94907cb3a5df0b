use super::*;
use crate::catalog::CategoryCount;
use crate::code_utils::plain_text;
use crate::model::Exercise;

impl PrepApp {
    /// Ejercicio de la sesión abierta
    pub fn current_exercise(&self) -> Option<&Exercise> {
        let session = self.session.as_ref()?;
        self.catalog.find(&session.exercise_id)
    }

    /// Ejercicios que pasan el filtro de búsqueda de la barra lateral
    pub fn visible_exercises(&self) -> Vec<&Exercise> {
        self.catalog.search(&self.search)
    }

    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.catalog.category_counts()
    }

    pub fn exercise_cards(&self) -> Vec<ExerciseCard> {
        self.catalog
            .all()
            .iter()
            .map(|e| ExerciseCard {
                id: e.id.clone(),
                title: e.title.clone(),
                category: e.category.clone(),
                difficulty: e.difficulty,
                summary: plain_text(&e.description),
                attempts: self.tracker.attempts_for(&e.id),
                completed: self.tracker.is_completed(&e.id),
            })
            .collect()
    }

    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        self.visible_exercises()
            .into_iter()
            .map(|e| SidebarEntry {
                id: e.id.clone(),
                title: e.title.clone(),
                difficulty: e.difficulty,
                completed: self.tracker.is_completed(&e.id),
            })
            .collect()
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        ProgressSummary {
            completed: self.tracker.completed(),
            total: self.catalog.len(),
            attempted: self.tracker.attempted(),
        }
    }
}
