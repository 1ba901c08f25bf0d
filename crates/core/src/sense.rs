//! Sense and pill reference data.

use serde::{Deserialize, Serialize};

use crate::id::{ClusterId, PillId, SenseId};

/// A lexical sense: one variant of a cluster's base word.
///
/// Immutable reference data, authored in the catalog. Exactly one sense
/// per cluster is the neutral placeholder; the rest are precision
/// variants, each carrying a [`Pill`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sense {
    /// Unique slug identifier
    pub id: SenseId,

    /// Owning cluster
    pub cluster_id: ClusterId,

    /// Base display text, e.g. "reach out to"
    pub base_word: String,

    /// Full replacement template, e.g. "reach out to {object}"
    pub full_form_template: String,

    /// True only for the neutral/fluent baseline variant
    pub is_placeholder: bool,

    /// Whether the sense needs a direct object
    pub requires_object: bool,

    /// Syllable stress hint, e.g. "chase THEM up"
    pub rhythmic_pattern: Option<String>,

    /// Difficulty from 1 (placeholder) to 5
    pub difficulty_level: u8,

    /// Situational activation signature; absent on the placeholder
    pub pill: Option<Pill>,
}

/// Situational activation signature attached 1:1 to a precision variant.
///
/// Read-only metadata describing when the variant beats the placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pill {
    /// Unique identifier
    pub id: PillId,

    /// The sense this pill describes
    pub sense_id: SenseId,

    /// Role relationship, e.g. "Accountability pressure"
    pub role_hierarchy: String,

    /// What the speaker is trying to do
    pub speaker_goal: String,

    /// What the interlocutor wants
    pub interlocutor_goal: String,

    /// e.g. "1-to-1 external consultation"
    pub participant_structure: String,

    /// Emotional register of the phrase
    pub emotional_temperature: TemperatureLevel,

    /// Temporal precondition for the phrase
    pub temporal_condition: TemporalCondition,

    /// e.g. "Non-imposing, relationship-aware"
    pub communicative_effect: String,

    /// Label shown to the user when the pill is revealed
    pub status_signal: String,
}

/// Emotional temperature of a sense in context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureLevel {
    /// Unmarked register
    Neutral,
    /// Warm, non-imposing
    Softened,
    /// Direct, time-pressured
    Urgent,
}

/// Temporal condition under which a sense activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalCondition {
    /// No timing constraint
    Neutral,
    /// Follows an unanswered earlier contact
    DelayedResponse,
    /// Happens before a dependent step
    Preemptive,
}
