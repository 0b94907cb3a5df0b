use super::*;
use crate::code_utils::reference_search_url;
use crate::judge::format_test_report;

impl PrepApp {
    /// "Ejecutar": cuenta un intento y programa la salida simulada.
    /// `now` es el reloj de egui en segundos.
    pub fn run_code(&mut self, now: f64) -> bool {
        self.start_evaluation(EvaluationKind::Run, now)
    }

    /// "Probar": cuenta un intento y programa el informe de tests
    pub fn test_code(&mut self, now: f64) -> bool {
        self.start_evaluation(EvaluationKind::Test, now)
    }

    fn start_evaluation(&mut self, kind: EvaluationKind, now: f64) -> bool {
        let delay = match kind {
            EvaluationKind::Run => self.config.run_delay_secs(),
            EvaluationKind::Test => self.config.test_delay_secs(),
        };
        let Some(session) = self.session.as_mut() else {
            self.message = "Error interno: no hay ejercicio seleccionado.".into();
            return false;
        };
        if session.is_busy() {
            self.message = "⏳ Ya hay una ejecución en curso. Espera el resultado.".into();
            return false;
        }

        self.tracker.record_attempt(&session.exercise_id);
        session.output = match kind {
            EvaluationKind::Run => "Ejecutando código...\n".into(),
            EvaluationKind::Test => "Ejecutando tests...\n".into(),
        };
        session.pending = Some(PendingEvaluation {
            kind,
            ready_at: now + delay,
        });
        self.message.clear();
        log::debug!("{kind:?} programado para {} (+{delay}s)", session.exercise_id);
        true
    }

    /// Resuelve la ejecución pendiente si ya venció. Devuelve `true` si
    /// se ha resuelto algo en esta llamada.
    pub fn poll_evaluation(&mut self, now: f64) -> bool {
        let Self {
            catalog,
            tracker,
            evaluator,
            session,
            ..
        } = self;
        let Some(session) = session.as_mut() else {
            return false;
        };
        let Some(pending) = session.pending else {
            return false;
        };
        if now < pending.ready_at {
            return false;
        }
        session.pending = None;

        let Some(exercise) = catalog.find(&session.exercise_id) else {
            session.output = "⚠ El ejercicio ya no está en el catálogo.".into();
            return true;
        };

        match pending.kind {
            EvaluationKind::Run => {
                session.output = evaluator.run(exercise, &session.code).text;
            }
            EvaluationKind::Test => {
                let report = evaluator.test(exercise, &session.code);
                session.output = format_test_report(&report);
                if report.all_passed && tracker.mark_completed(&exercise.id) {
                    log::info!("{} completado", exercise.id);
                }
            }
        }
        true
    }

    /// Segundos que faltan para la ejecución pendiente (para repintar)
    pub fn pending_remaining(&self, now: f64) -> Option<f64> {
        let pending = self.session.as_ref()?.pending?;
        Some((pending.ready_at - now).max(0.0))
    }

    /// Sustituye el código del editor por la solución
    pub fn use_solution(&mut self) {
        let Some(solution) = self.current_exercise().map(|e| e.solution_code.clone()) else {
            return;
        };
        if let Some(session) = self.session.as_mut() {
            session.code = solution;
        }
    }

    pub fn reset_code(&mut self) {
        let Some(initial) = self.current_exercise().map(|e| e.initial_code.clone()) else {
            return;
        };
        if let Some(session) = self.session.as_mut() {
            session.code = initial;
        }
    }

    pub fn next_step(&mut self) {
        let total = self.current_exercise().map(|e| e.steps().len()).unwrap_or(0);
        if let Some(session) = self.session.as_mut() {
            if session.step + 1 < total {
                session.step += 1;
            }
        }
    }

    pub fn previous_step(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.step = session.step.saturating_sub(1);
        }
    }

    /// Prepara la búsqueda de referencia y devuelve la URL a abrir
    pub fn reference_search(&mut self) -> Option<String> {
        let session = self.session.as_mut()?;
        let query = session.search_query.trim().to_string();
        let url = reference_search_url(&query)?;
        session.search_results = vec![
            format!("Búsqueda abierta en Google: «{query}»"),
            "Pulsa aquí para repetirla si el navegador bloqueó la ventana".to_string(),
        ];
        log::debug!("búsqueda de referencia: {query}");
        Some(url)
    }
}
