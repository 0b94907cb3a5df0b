// src/data.rs

use crate::code_utils::html_to_markdown;
use crate::model::Exercise;

const EXERCISES_YAML: &str = include_str!("data/exercises.yaml");

/// Carga el banco de ejercicios desde el YAML embebido
pub fn read_exercises_embedded() -> Result<Vec<Exercise>, serde_yaml::Error> {
    read_exercises_from_str(EXERCISES_YAML)
}

/// Parsea el banco y pasa descripciones y pasos de HTML a Markdown
pub fn read_exercises_from_str(content: &str) -> Result<Vec<Exercise>, serde_yaml::Error> {
    let mut exercises: Vec<Exercise> = serde_yaml::from_str(content)?;
    for exercise in &mut exercises {
        exercise.description = html_to_markdown(&exercise.description);
        for step in &mut exercise.step_by_step_solution.steps {
            step.content = html_to_markdown(&step.content);
        }
    }
    Ok(exercises)
}
