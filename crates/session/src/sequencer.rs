//! Pure cursor functions over the exercise catalog.
//!
//! The cursor itself lives in [`ExerciseState`]; everything here reads
//! or moves it without touching storage. A stage index one past the
//! last stage is the terminal "session complete" cursor.

use preclang_catalog::ExerciseCatalog;
use preclang_core::{Exercise, ExerciseState};

/// Whether the cursor has consumed every stage.
pub fn is_complete(catalog: &ExerciseCatalog, state: &ExerciseState) -> bool {
    state.stage_index >= catalog.stage_count()
}

/// The exercise under the cursor. `None` exactly when the session is
/// complete.
pub fn current_exercise<'a>(
    catalog: &'a ExerciseCatalog,
    state: &ExerciseState,
) -> Option<&'a Exercise> {
    catalog
        .stages()
        .get(state.stage_index)?
        .exercises
        .get(state.exercise_index)
}

/// 1-indexed (current, total) position across all stages.
///
/// On the terminal cursor both values equal the total.
pub fn global_position(catalog: &ExerciseCatalog, state: &ExerciseState) -> (usize, usize) {
    let total = catalog.total_exercises();
    if is_complete(catalog, state) {
        return (total, total);
    }

    let before: usize = catalog.stages()[..state.stage_index]
        .iter()
        .map(|s| s.exercises.len())
        .sum();
    (before + state.exercise_index + 1, total)
}

/// Move the cursor strictly forward by one exercise.
///
/// Advancing off the last exercise of the last stage produces the
/// terminal cursor and stamps `completed_at`; advancing a terminal
/// cursor is a no-op. There is no wraparound and no path backwards.
pub fn advance(catalog: &ExerciseCatalog, state: &mut ExerciseState) {
    if is_complete(catalog, state) {
        return;
    }

    let stage_len = catalog.stages()[state.stage_index].exercises.len();
    if state.exercise_index + 1 < stage_len {
        state.exercise_index += 1;
        return;
    }

    state.stage_index += 1;
    if state.stage_index < catalog.stage_count() {
        state.exercise_index = 0;
    } else if state.completed_at.is_none() {
        state.completed_at = Some(chrono::Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preclang_catalog::contact_catalog;

    #[test]
    fn advance_walks_every_exercise_exactly_once() {
        let catalog = contact_catalog();
        let mut state = ExerciseState::cold_boot();
        let mut seen = Vec::new();

        while let Some(exercise) = current_exercise(&catalog, &state) {
            seen.push(exercise.id().as_str().to_string());
            advance(&catalog, &mut state);
        }

        assert_eq!(
            seen,
            vec!["s1-e1", "s1-e2", "s1-e3", "s2-e1", "s2-e2", "s3-e1", "s3-e2"]
        );
        assert!(is_complete(&catalog, &state));
        assert!(state.completed_at.is_some());
    }

    #[test]
    fn cursor_never_moves_backwards() {
        let catalog = contact_catalog();
        let mut state = ExerciseState::cold_boot();
        let mut prev = (state.stage_index, state.exercise_index);

        for _ in 0..20 {
            advance(&catalog, &mut state);
            let next = (state.stage_index, state.exercise_index);
            assert!(next >= prev, "cursor regressed: {prev:?} -> {next:?}");
            prev = next;
        }
    }

    #[test]
    fn global_position_increments_by_one_per_advance() {
        let catalog = contact_catalog();
        let mut state = ExerciseState::cold_boot();
        let total = catalog.total_exercises();

        for expected in 1..=total {
            assert_eq!(global_position(&catalog, &state), (expected, total));
            advance(&catalog, &mut state);
        }

        // Terminal cursor reports current == total.
        assert_eq!(global_position(&catalog, &state), (total, total));
    }

    #[test]
    fn terminal_cursor_is_stable_under_advance() {
        let catalog = contact_catalog();
        let mut state = ExerciseState::cold_boot();
        for _ in 0..catalog.total_exercises() {
            advance(&catalog, &mut state);
        }

        let terminal = state.clone();
        advance(&catalog, &mut state);
        assert_eq!(state, terminal);
        assert!(current_exercise(&catalog, &state).is_none());
    }
}
