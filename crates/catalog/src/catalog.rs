//! Catalog type and authoring-invariant validation.

use preclang_core::{Exercise, ExerciseId, Stage};

/// One stage's ordered exercise list.
#[derive(Debug, Clone)]
pub struct StageExercises {
    /// The stage these exercises belong to
    pub stage: Stage,

    /// Ordered exercises
    pub exercises: Vec<Exercise>,
}

/// The full, ordered exercise catalog for one cluster session.
///
/// Static after construction; the exercise total is computed once here
/// rather than on every position query.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    stages: Vec<StageExercises>,
    total: usize,
}

impl ExerciseCatalog {
    /// Build a catalog from ordered stages.
    pub fn new(stages: Vec<StageExercises>) -> Self {
        let total = stages.iter().map(|s| s.exercises.len()).sum();
        Self { stages, total }
    }

    /// Ordered stages.
    pub fn stages(&self) -> &[StageExercises] {
        &self.stages
    }

    /// Number of stages.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Total exercise count across all stages.
    pub fn total_exercises(&self) -> usize {
        self.total
    }

    /// Check the authoring invariants: every multi-choice exercise has
    /// its `correct` value among its options and a blank in its prompt,
    /// and every free-text exercise has at least one required word.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for stage in &self.stages {
            for exercise in &stage.exercises {
                match exercise {
                    Exercise::MultiChoice(e) => {
                        if !e.options.contains(&e.correct) {
                            return Err(CatalogError::CorrectNotInOptions {
                                exercise: e.id.clone(),
                            });
                        }
                        if !e.prompt.contains("______") {
                            return Err(CatalogError::MissingBlank {
                                exercise: e.id.clone(),
                            });
                        }
                    }
                    Exercise::FreeText(e) => {
                        if e.required_words.is_empty() {
                            return Err(CatalogError::EmptyRequiredWords {
                                exercise: e.id.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Authoring errors surfaced by [`ExerciseCatalog::validate`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// `correct` does not appear in the options list
    #[error("exercise {exercise}: `correct` is not one of the options")]
    CorrectNotInOptions {
        /// Offending exercise
        exercise: ExerciseId,
    },

    /// Multi-choice prompt has no fill-in blank
    #[error("exercise {exercise}: prompt has no `______` blank")]
    MissingBlank {
        /// Offending exercise
        exercise: ExerciseId,
    },

    /// Free-text exercise has an empty required-word set
    #[error("exercise {exercise}: no required words")]
    EmptyRequiredWords {
        /// Offending exercise
        exercise: ExerciseId,
    },
}
