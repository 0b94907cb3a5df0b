use crate::data::read_exercises_embedded;
use crate::model::Exercise;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo parsear el banco de ejercicios: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("id de ejercicio duplicado: {0}")]
    DuplicateId(String),
    #[error("ejercicio en la posición {0} sin id")]
    EmptyId(usize),
}

/// Número de ejercicios de una categoría (para la barra lateral)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Tabla de ejercicios de sólo lectura, en orden de definición.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (pos, exercise) in exercises.iter().enumerate() {
            if exercise.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(pos));
            }
            if !seen.insert(exercise.id.as_str()) {
                return Err(CatalogError::DuplicateId(exercise.id.clone()));
            }
        }
        Ok(Self { exercises })
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        let exercises = read_exercises_embedded()?;
        let catalog = Self::new(exercises)?;
        log::info!("catálogo cargado: {} ejercicios", catalog.len());
        Ok(catalog)
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn filter<P>(&self, mut predicate: P) -> Vec<&Exercise>
    where
        P: FnMut(&Exercise) -> bool,
    {
        self.exercises.iter().filter(|e| predicate(e)).collect()
    }

    /// Búsqueda sin distinguir mayúsculas sobre título y categoría.
    /// Un término vacío devuelve todo el catálogo.
    pub fn search(&self, term: &str) -> Vec<&Exercise> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.exercises.iter().collect();
        }
        self.filter(|e| {
            e.title.to_lowercase().contains(&needle) || e.category.to_lowercase().contains(&needle)
        })
    }

    /// Recuento por categoría, en orden de primera aparición
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for exercise in &self.exercises {
            match counts.iter_mut().find(|c| c.name == exercise.category) {
                Some(entry) => entry.count += 1,
                None => counts.push(CategoryCount {
                    name: exercise.category.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, StepByStepSolution};

    fn exercise(id: &str, title: &str, category: &str) -> Exercise {
        Exercise {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            difficulty: Difficulty::Easy,
            language: "js".into(),
            description: String::new(),
            examples: vec![],
            initial_code: String::new(),
            solution_code: String::new(),
            test_cases: vec![],
            step_by_step_solution: StepByStepSolution::default(),
        }
    }

    #[test]
    fn all_keeps_definition_order_and_is_repeatable() {
        let catalog = Catalog::embedded().expect("catálogo embebido");
        let first: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
        let second: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(catalog.len(), 12);
        assert_eq!(first[0], "todo-app");
        assert_eq!(first[11], "color-selector");
    }

    #[test]
    fn title_filter_finds_only_tic_tac_toe() {
        let catalog = Catalog::embedded().expect("catálogo embebido");
        let hits = catalog.filter(|e| e.title.to_lowercase().contains("toe"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "tic-tac-toe");
        assert_eq!(hits[0].title, "Tic Tac Toe Game");
    }

    #[test]
    fn category_tally_sums_to_catalog_size() {
        let catalog = Catalog::embedded().expect("catálogo embebido");
        let counts = catalog.category_counts();
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, catalog.len());
        for c in &counts {
            assert_eq!(c.count, catalog.filter(|e| e.category == c.name).len());
        }
        assert_eq!(
            counts,
            vec![
                CategoryCount { name: "React".into(), count: 11 },
                CategoryCount { name: "Algorithms".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_category() {
        let catalog = Catalog::new(vec![
            exercise("a", "String Reversal", "Algorithms"),
            exercise("b", "Todo App", "React"),
            exercise("c", "Binary Search", "Algorithms"),
        ])
        .expect("catálogo válido");

        let ids = |hits: Vec<&Exercise>| hits.iter().map(|e| e.id.clone()).collect::<Vec<String>>();
        assert_eq!(ids(catalog.search("ALGO")), vec!["a", "c"]);
        assert_eq!(ids(catalog.search("todo")), vec!["b"]);
        assert_eq!(ids(catalog.search("   ")), vec!["a", "b", "c"]);
        assert!(catalog.search("graph").is_empty());
    }

    #[test]
    fn find_unknown_id_is_none() {
        let catalog = Catalog::embedded().expect("catálogo embebido");
        assert!(catalog.find("does-not-exist").is_none());
        assert_eq!(
            catalog.find("phone-book").map(|e| e.title.as_str()),
            Some("Phone Book Application")
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![exercise("x", "A", "React"), exercise("x", "B", "React")])
            .expect_err("id duplicado");
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn empty_ids_are_rejected() {
        let err = Catalog::new(vec![exercise("ok", "A", "React"), exercise(" ", "B", "React")])
            .expect_err("id vacío");
        assert!(matches!(err, CatalogError::EmptyId(1)));
    }

    #[test]
    fn every_embedded_exercise_offers_step_mode() {
        let catalog = Catalog::embedded().expect("catálogo embebido");
        assert!(catalog.all().iter().all(|e| e.has_step_mode()));
    }
}
