//! Pure answer evaluation.
//!
//! Evaluation never touches progress or storage; it maps one
//! (exercise, answer) pair to an outcome the service and presentation
//! layer act on.

use preclang_core::{Exercise, ExerciseId, FeedbackPath, SenseId, Stage};

/// A submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// An option string picked in a multiple-choice exercise
    Selection(String),
    /// Free text typed in a timed production exercise. Timeout
    /// auto-submission passes whatever text is present and is not
    /// distinguished from a manual submission.
    Typed(String),
}

/// Evaluation outcome for one submission.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A multiple-choice result
    Choice(ChoiceOutcome),
    /// A free-text result
    FreeText(FreeTextOutcome),
}

impl Outcome {
    /// Whether the submission counted as correct.
    pub fn is_correct(&self) -> bool {
        match self {
            Outcome::Choice(o) => o.correct,
            Outcome::FreeText(o) => o.correct,
        }
    }
}

/// Result of a multiple-choice submission.
#[derive(Debug, Clone)]
pub struct ChoiceOutcome {
    /// Exact, case-sensitive match against the authored `correct`
    pub correct: bool,

    /// The feedback path matching the outcome
    pub feedback: FeedbackPath,

    /// Session points delta: +1 correct, -1 incorrect
    pub points_delta: i32,

    /// Sense to reveal, set only on a correct stage-1 answer with an
    /// attributed sense
    pub unlocked_sense: Option<SenseId>,
}

/// Result of a free-text submission.
#[derive(Debug, Clone)]
pub struct FreeTextOutcome {
    /// True iff every required word appears in the response
    pub correct: bool,

    /// Sense credited on success, when the exercise attributes one
    pub sense_id: Option<SenseId>,
}

/// Evaluation errors. All of these indicate a caller bug, not a wrong
/// answer.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The answer variant does not fit the exercise variant
    #[error("exercise {exercise} expects a {expected} answer")]
    AnswerMismatch {
        /// Exercise being answered
        exercise: ExerciseId,
        /// The answer kind the exercise takes
        expected: &'static str,
    },
}

/// Evaluate one answer against one exercise.
///
/// The match over (exercise, answer) is exhaustive; a new exercise
/// variant forces a decision here at compile time.
pub fn evaluate(exercise: &Exercise, answer: &Answer) -> Result<Outcome, EvalError> {
    match (exercise, answer) {
        (Exercise::MultiChoice(e), Answer::Selection(selection)) => {
            // An unknown selection simply fails the equality check.
            let correct = *selection == e.correct;
            let feedback = if correct {
                e.feedback.correct.clone()
            } else {
                e.feedback.incorrect.clone()
            };
            let unlocked_sense = if correct && e.stage == Stage::Noticing {
                e.sense_id.clone()
            } else {
                None
            };

            Ok(Outcome::Choice(ChoiceOutcome {
                correct,
                feedback,
                points_delta: if correct { 1 } else { -1 },
                unlocked_sense,
            }))
        }
        (Exercise::FreeText(e), Answer::Typed(text)) => Ok(Outcome::FreeText(FreeTextOutcome {
            correct: contains_required_words(text, &e.required_words),
            sense_id: e.sense_id.clone(),
        })),
        (Exercise::MultiChoice(e), Answer::Typed(_)) => Err(EvalError::AnswerMismatch {
            exercise: e.id.clone(),
            expected: "selection",
        }),
        (Exercise::FreeText(e), Answer::Selection(_)) => Err(EvalError::AnswerMismatch {
            exercise: e.id.clone(),
            expected: "typed",
        }),
    }
}

/// Case-insensitive substring containment of every required word, in
/// any order, with no word-boundary handling.
pub fn contains_required_words(response: &str, required_words: &[String]) -> bool {
    let lower = response.to_lowercase();
    required_words
        .iter()
        .all(|word| lower.contains(&word.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use preclang_catalog::contact_catalog;

    fn exercise(id: &str) -> Exercise {
        let catalog = contact_catalog();
        catalog
            .stages()
            .iter()
            .flat_map(|s| s.exercises.iter())
            .find(|e| e.id().as_str() == id)
            .cloned()
            .unwrap()
    }

    #[test]
    fn exact_match_is_correct_and_awards_a_point() {
        let outcome = evaluate(
            &exercise("s1-e1"),
            &Answer::Selection("reach out to you".to_string()),
        )
        .unwrap();

        let Outcome::Choice(o) = outcome else {
            panic!("expected choice outcome")
        };
        assert!(o.correct);
        assert_eq!(o.points_delta, 1);
        assert_eq!(o.unlocked_sense.as_ref().unwrap().as_str(), "reach-out");
        assert_eq!(
            o.feedback.interlocutor_reaction,
            "Thanks for reaching out — happy to revisit this."
        );
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let outcome = evaluate(
            &exercise("s1-e1"),
            &Answer::Selection("Reach out to you".to_string()),
        )
        .unwrap();
        assert!(!outcome.is_correct());
    }

    #[test]
    fn unknown_selection_is_gracefully_incorrect() {
        let outcome = evaluate(
            &exercise("s1-e1"),
            &Answer::Selection("ping you".to_string()),
        )
        .unwrap();

        let Outcome::Choice(o) = outcome else {
            panic!("expected choice outcome")
        };
        assert!(!o.correct);
        assert_eq!(o.points_delta, -1);
        assert!(o.unlocked_sense.is_none());
    }

    #[test]
    fn correct_stage2_answer_does_not_unlock() {
        let outcome = evaluate(
            &exercise("s2-e1"),
            &Answer::Selection("chase them up".to_string()),
        )
        .unwrap();

        let Outcome::Choice(o) = outcome else {
            panic!("expected choice outcome")
        };
        assert!(o.correct);
        assert!(o.unlocked_sense.is_none());
    }

    #[test]
    fn required_words_match_in_any_order_without_boundaries() {
        let words = vec!["chase".to_string(), "up".to_string()];
        assert!(contains_required_words("I will chase it up tomorrow", &words));
        assert!(contains_required_words("Up next: CHASE them", &words));
        assert!(!contains_required_words("I will call them", &words));
    }

    #[test]
    fn free_text_credits_the_attributed_sense() {
        let outcome = evaluate(
            &exercise("s3-e1"),
            &Answer::Typed("I'll chase them up right away".to_string()),
        )
        .unwrap();

        let Outcome::FreeText(o) = outcome else {
            panic!("expected free-text outcome")
        };
        assert!(o.correct);
        assert_eq!(o.sense_id.as_ref().unwrap().as_str(), "chase-up");
    }

    #[test]
    fn answer_variant_mismatch_is_a_typed_error() {
        let err = evaluate(&exercise("s1-e1"), &Answer::Typed("hello".to_string())).unwrap_err();
        assert!(matches!(err, EvalError::AnswerMismatch { .. }));

        let err = evaluate(
            &exercise("s3-e1"),
            &Answer::Selection("chase them up".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::AnswerMismatch { .. }));
    }
}
