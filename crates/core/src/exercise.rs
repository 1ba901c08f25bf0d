//! Exercise catalog entries.

use serde::{Deserialize, Serialize};

use crate::id::{ExerciseId, SenseId};

/// One of the three escalating difficulty phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Stage 1: contrastive encoding, pill visible, no time pressure
    Noticing,
    /// Stage 2: cue-triggered override with a distractor present
    Retrieval,
    /// Stage 3: timed free-text production under pressure
    Automation,
}

impl Stage {
    /// 1-based stage number as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Stage::Noticing => 1,
            Stage::Retrieval => 2,
            Stage::Automation => 3,
        }
    }
}

/// An immutable catalog exercise.
///
/// The two variants carry disjoint answer models, so evaluation is an
/// exhaustive match; adding a third exercise type is a compile-time
/// checked change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Exercise {
    /// Multiple choice (stages 1 and 2)
    MultiChoice(MultiChoiceExercise),
    /// Timed free text (stage 3)
    FreeText(FreeTextExercise),
}

impl Exercise {
    /// Exercise identifier.
    pub fn id(&self) -> &ExerciseId {
        match self {
            Exercise::MultiChoice(e) => &e.id,
            Exercise::FreeText(e) => &e.id,
        }
    }

    /// Stage this exercise belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Exercise::MultiChoice(e) => e.stage,
            Exercise::FreeText(e) => e.stage,
        }
    }

    /// Sense trained by this exercise, when one is attributed.
    pub fn sense_id(&self) -> Option<&SenseId> {
        match self {
            Exercise::MultiChoice(e) => e.sense_id.as_ref(),
            Exercise::FreeText(e) => e.sense_id.as_ref(),
        }
    }

    /// Scenario context, when the exercise carries one.
    pub fn context(&self) -> Option<&ExerciseContext> {
        match self {
            Exercise::MultiChoice(e) => Some(&e.context),
            Exercise::FreeText(e) => e.context.as_ref(),
        }
    }
}

/// A fill-in-the-blank multiple-choice exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiChoiceExercise {
    /// Unique identifier
    pub id: ExerciseId,

    /// Stage this exercise belongs to (noticing or retrieval)
    pub stage: Stage,

    /// Situation description shown above the card
    pub scenario: String,

    /// Prompt containing the `______` blank
    pub prompt: String,

    /// Neutral phrase initially shown in the blank
    pub placeholder: Option<String>,

    /// Key phrase in the scenario to highlight after answering
    pub scenario_highlight: Option<String>,

    /// All selectable option phrases
    pub options: Vec<String>,

    /// The option that counts as correct.
    /// Authoring invariant: always present in `options`.
    pub correct: String,

    /// Unrelated options (stage 2). Informational only; never read by
    /// evaluation.
    #[serde(default)]
    pub distractors: Vec<String>,

    /// Pill label revealed on a correct stage-1 answer
    pub pill: Option<String>,

    /// Sense trained by this exercise
    pub sense_id: Option<SenseId>,

    /// Scenario participants and background
    pub context: ExerciseContext,

    /// Feedback for both outcomes
    pub feedback: ExerciseFeedback,
}

/// A timed free-text production exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeTextExercise {
    /// Unique identifier
    pub id: ExerciseId,

    /// Stage this exercise belongs to (automation)
    pub stage: Stage,

    /// Pressure prompt, e.g. "Investor waiting. Two weeks silence. Respond."
    pub prompt: String,

    /// Countdown length in seconds; at zero the current text is
    /// auto-submitted and evaluated like a manual submission
    pub time_seconds: u32,

    /// Every entry must appear (case-insensitive substring) in the
    /// response. Authoring invariant: non-empty.
    pub required_words: Vec<String>,

    /// Raw authored pattern. Informational only; evaluation is substring
    /// containment.
    pub pattern: Option<String>,

    /// Sense credited on a successful production
    pub sense_id: Option<SenseId>,

    /// Scenario participants and background
    pub context: Option<ExerciseContext>,
}

/// Scenario participants and background for an exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseContext {
    /// Role the user plays, e.g. "Project Manager"
    pub user_role: String,

    /// What the user is trying to achieve
    pub user_goal: String,

    /// Who the user is talking to, e.g. "External Consultant"
    pub interlocutor: String,

    /// What the interlocutor wants
    pub interlocutor_goal: String,

    /// Background text the medium label is inferred from
    pub background: String,

    /// Opening line spoken by the interlocutor
    pub initial_dialogue: Option<String>,
}

impl ExerciseContext {
    /// Infer the communication medium from the background text.
    ///
    /// Case-insensitive substring search in priority order: "email",
    /// then "message", then "face". First match wins.
    pub fn medium(&self) -> Medium {
        let lower = self.background.to_lowercase();
        if lower.contains("email") {
            Medium::Email
        } else if lower.contains("message") {
            Medium::Message
        } else if lower.contains("face") {
            Medium::FaceToFace
        } else {
            Medium::Chat
        }
    }
}

/// Communication medium label shown on the exercise container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Medium {
    /// Written email exchange
    Email,
    /// Instant message exchange
    Message,
    /// In-person conversation
    FaceToFace,
    /// Generic conversation/chat fallback
    Chat,
}

impl Medium {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Medium::Email => "Email",
            Medium::Message => "Message",
            Medium::FaceToFace => "Face-to-Face",
            Medium::Chat => "Conversation",
        }
    }
}

/// Feedback content for both answer paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseFeedback {
    /// Shown on a correct answer
    pub correct: FeedbackPath,

    /// Shown on an incorrect answer
    pub incorrect: FeedbackPath,
}

/// One feedback path: what the interlocutor says back and how the
/// answer lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPath {
    /// Dialogue line spoken back by the interlocutor
    pub interlocutor_reaction: String,

    /// Goal alignment line
    pub alignment: String,

    /// Status signal line
    pub signal: String,
}
