use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

mod tracker;

pub use tracker::{ProgressTracker, STATS_KEY};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("registro de progreso ilegible: {0}")]
    Json(#[from] serde_json::Error),
    #[error("completed = {declared} pero hay {actual} ejercicios completados")]
    CompletedMismatch { declared: u64, actual: u64 },
    #[error("attempted = {declared} pero la suma de intentos es {actual}")]
    AttemptedMismatch { declared: u64, actual: u64 },
    #[error("la suma de intentos desborda u64")]
    AttemptOverflow,
    #[error("ejercicio completado repetido: {0}")]
    DuplicateCompleted(String),
}

/// Estado de progreso de la sesión. Es también el formato del registro
/// persistido (claves en camelCase, sin campo de versión).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressState {
    pub completed: u64,
    pub attempted: u64,
    pub exercise_attempts: BTreeMap<String, u64>,
    pub completed_exercises: Vec<String>,
}

impl ProgressState {
    /// Parsea y valida un registro guardado. Cualquier desajuste de forma o
    /// de contadores es un error: el registro no se acepta a medias.
    pub fn from_record(raw: &str) -> Result<Self, RecordError> {
        let state: ProgressState = serde_json::from_str(raw)?;
        state.validate()?;
        Ok(state)
    }

    pub fn to_record(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        let mut seen = HashSet::new();
        for id in &self.completed_exercises {
            if !seen.insert(id.as_str()) {
                return Err(RecordError::DuplicateCompleted(id.clone()));
            }
        }

        let actual_completed = self.completed_exercises.len() as u64;
        if self.completed != actual_completed {
            return Err(RecordError::CompletedMismatch {
                declared: self.completed,
                actual: actual_completed,
            });
        }

        let actual_attempted = self
            .exercise_attempts
            .values()
            .try_fold(0u64, |acc, n| acc.checked_add(*n))
            .ok_or(RecordError::AttemptOverflow)?;
        if self.attempted != actual_attempted {
            return Err(RecordError::AttemptedMismatch {
                declared: self.attempted,
                actual: actual_attempted,
            });
        }
        Ok(())
    }

    pub fn attempts_for(&self, id: &str) -> u64 {
        self.exercise_attempts.get(id).copied().unwrap_or(0)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_exercises.iter().any(|c| c == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProgressState {
        let mut exercise_attempts = BTreeMap::new();
        exercise_attempts.insert("todo-app".to_string(), 3);
        exercise_attempts.insert("string-reversal".to_string(), 1);
        ProgressState {
            completed: 1,
            attempted: 4,
            exercise_attempts,
            completed_exercises: vec!["todo-app".into()],
        }
    }

    #[test]
    fn record_round_trip_keeps_every_field() {
        let state = sample();
        let raw = state.to_record().expect("serializa");
        let back = ProgressState::from_record(&raw).expect("registro válido");
        assert_eq!(back, state);
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let raw = sample().to_record().expect("serializa");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["completed"], 1);
        assert_eq!(value["attempted"], 4);
        assert_eq!(value["exerciseAttempts"]["todo-app"], 3);
        assert_eq!(value["completedExercises"][0], "todo-app");
    }

    #[test]
    fn record_written_by_the_web_version_is_accepted() {
        let raw = r#"{"completed":1,"attempted":2,"exerciseAttempts":{"tic-tac-toe":2},"completedExercises":["tic-tac-toe"]}"#;
        let state = ProgressState::from_record(raw).expect("registro válido");
        assert_eq!(state.attempts_for("tic-tac-toe"), 2);
        assert!(state.is_completed("tic-tac-toe"));
        assert!(!state.is_completed("todo-app"));
    }

    #[test]
    fn non_json_is_rejected() {
        assert!(matches!(
            ProgressState::from_record("not json {"),
            Err(RecordError::Json(_))
        ));
        assert!(ProgressState::from_record("").is_err());
        assert!(ProgressState::from_record("null").is_err());
        assert!(ProgressState::from_record("[]").is_err());
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        // falta un campo
        assert!(ProgressState::from_record(r#"{"completed":0,"attempted":0,"exerciseAttempts":{}}"#).is_err());
        // tipos incorrectos
        assert!(ProgressState::from_record(r#"{"completed":"0","attempted":0,"exerciseAttempts":{},"completedExercises":[]}"#).is_err());
        assert!(ProgressState::from_record(r#"{"completed":0,"attempted":-1,"exerciseAttempts":{},"completedExercises":[]}"#).is_err());
        assert!(ProgressState::from_record(r#"{"completed":0,"attempted":1.5,"exerciseAttempts":{},"completedExercises":[]}"#).is_err());
        assert!(ProgressState::from_record(r#"{"completed":0,"attempted":0,"exerciseAttempts":[],"completedExercises":[]}"#).is_err());
        // campo desconocido
        assert!(ProgressState::from_record(r#"{"completed":0,"attempted":0,"exerciseAttempts":{},"completedExercises":[],"version":2}"#).is_err());
    }

    #[test]
    fn inconsistent_counters_are_rejected() {
        let raw = r#"{"completed":2,"attempted":0,"exerciseAttempts":{},"completedExercises":["a"]}"#;
        assert!(matches!(
            ProgressState::from_record(raw),
            Err(RecordError::CompletedMismatch { declared: 2, actual: 1 })
        ));

        let raw = r#"{"completed":0,"attempted":5,"exerciseAttempts":{"a":2},"completedExercises":[]}"#;
        assert!(matches!(
            ProgressState::from_record(raw),
            Err(RecordError::AttemptedMismatch { declared: 5, actual: 2 })
        ));
    }

    #[test]
    fn duplicate_completed_ids_are_rejected() {
        let raw = r#"{"completed":2,"attempted":0,"exerciseAttempts":{},"completedExercises":["a","a"]}"#;
        assert!(matches!(
            ProgressState::from_record(raw),
            Err(RecordError::DuplicateCompleted(id)) if id == "a"
        ));
    }

    #[test]
    fn overflowing_attempts_are_rejected() {
        let raw = format!(
            r#"{{"completed":0,"attempted":0,"exerciseAttempts":{{"a":{max},"b":1}},"completedExercises":[]}}"#,
            max = u64::MAX
        );
        assert!(matches!(
            ProgressState::from_record(&raw),
            Err(RecordError::AttemptOverflow)
        ));
    }
}
