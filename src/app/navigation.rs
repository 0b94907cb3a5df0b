use super::*;

impl PrepApp {
    /// Abre la vista de un ejercicio con el código inicial. Un id que no
    /// está en el catálogo deja la vista como estaba.
    pub fn select_exercise(&mut self, id: &str) -> bool {
        let Some(exercise) = self.catalog.find(id) else {
            log::warn!("ejercicio desconocido: {id}");
            self.message = format!("No existe el ejercicio «{id}».");
            return false;
        };

        log::debug!("abriendo {id}");
        self.session = Some(ExerciseSession::new(&exercise.id, &exercise.initial_code));
        self.state = AppState::Exercise;
        self.message.clear();
        true
    }

    /// Vuelve al listado; una ejecución pendiente se descarta
    pub fn go_back(&mut self) {
        if let Some(session) = self.session.take() {
            if session.pending.is_some() {
                log::debug!("descartada la ejecución pendiente de {}", session.exercise_id);
            }
        }
        self.state = AppState::ExerciseList;
        self.message.clear();
    }

    /// Atajo de la barra lateral: filtra por el nombre de la categoría
    pub fn filter_by_category(&mut self, category: &str) {
        self.search = category.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }
}
