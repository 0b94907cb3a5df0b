// src/view_models.rs

use crate::model::Difficulty;

/// Tarjeta del listado principal
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub summary: String, // descripción en texto plano
    pub attempts: u64,
    pub completed: bool,
}

impl ExerciseCard {
    pub fn attempts_label(&self) -> String {
        match self.attempts {
            0 => "Sin intentos todavía".to_string(),
            1 => "1 intento".to_string(),
            n => format!("{n} intentos"),
        }
    }

    pub fn title_label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.title)
        } else {
            self.title.clone()
        }
    }
}

/// Ejercicio en la lista de la barra lateral
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarEntry {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub completed: bool,
}

impl SidebarEntry {
    pub fn tooltip(&self) -> String {
        format!("{} - {}", self.title, self.difficulty.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: u64,
    pub total: usize,
    pub attempted: u64,
}

impl ProgressSummary {
    pub fn label(&self) -> String {
        format!("{} / {} completados", self.completed, self.total)
    }

    pub fn attempts_label(&self) -> String {
        match self.attempted {
            1 => "1 intento en total".to_string(),
            n => format!("{n} intentos en total"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(attempts: u64, completed: bool) -> ExerciseCard {
        ExerciseCard {
            id: "todo-app".into(),
            title: "React Todo App".into(),
            category: "React".into(),
            difficulty: Difficulty::Easy,
            summary: String::new(),
            attempts,
            completed,
        }
    }

    #[test]
    fn attempts_label_reads_naturally() {
        assert_eq!(card(0, false).attempts_label(), "Sin intentos todavía");
        assert_eq!(card(1, false).attempts_label(), "1 intento");
        assert_eq!(card(7, false).attempts_label(), "7 intentos");
    }

    #[test]
    fn completed_cards_get_a_badge() {
        assert_eq!(card(2, true).title_label(), "React Todo App ✅");
        assert_eq!(card(2, false).title_label(), "React Todo App");
    }

    #[test]
    fn summary_label_shows_ratio() {
        let summary = ProgressSummary {
            completed: 3,
            total: 12,
            attempted: 9,
        };
        assert_eq!(summary.label(), "3 / 12 completados");
        assert_eq!(summary.attempts_label(), "9 intentos en total");
    }

    #[test]
    fn summary_attempts_label_singular() {
        let summary = ProgressSummary {
            completed: 0,
            total: 12,
            attempted: 1,
        };
        assert_eq!(summary.attempts_label(), "1 intento en total");
    }

    #[test]
    fn sidebar_entry_tooltip_names_the_exercise() {
        let entry = SidebarEntry {
            id: "tic-tac-toe".into(),
            title: "Tic Tac Toe Game".into(),
            difficulty: Difficulty::Medium,
            completed: false,
        };
        assert_eq!(entry.tooltip(), "Tic Tac Toe Game - Medium");
    }
}
