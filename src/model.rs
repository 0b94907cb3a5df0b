use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    pub description: String,
    #[serde(default)]
    pub input: Option<String>,
    pub expected: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionStep {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct StepByStepSolution {
    #[serde(default)]
    pub steps: Vec<SolutionStep>,
}

/// Un ejercicio del catálogo. Se carga una vez y nunca se modifica.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// Lenguaje de los snippets (tsx, js...), sólo se usa para el resaltado
    #[serde(default)]
    pub language: String,
    pub description: String, // HTML reducido: <p>, <ul>, <li>
    #[serde(default)]
    pub examples: Vec<String>,
    pub initial_code: String,
    pub solution_code: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub step_by_step_solution: StepByStepSolution,
}

impl Exercise {
    pub fn steps(&self) -> &[SolutionStep] {
        &self.step_by_step_solution.steps
    }

    /// Sólo los ejercicios con pasos ofrecen el modo paso a paso
    pub fn has_step_mode(&self) -> bool {
        !self.step_by_step_solution.steps.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    ExerciseList,
    Exercise,
}

/// Pestaña lateral de la vista de ejercicio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideTab {
    #[default]
    Reference,
    Steps,
}
