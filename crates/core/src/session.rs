//! Session-scoped state: the exercise cursor, aggregate snapshot and
//! user profile.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::exercise::Stage;
use crate::id::{ClusterId, PillId, SenseId, UserId};
use crate::progress::UserSenseProgress;
use crate::Time;

/// Cursor over the exercise catalog plus the unlocked-sense set.
///
/// Persisted after every change so a reload resumes at the same
/// exercise. `stage_index` one past the last stage is the terminal
/// "session complete" cursor, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseState {
    /// Index into the catalog's stage list
    pub stage_index: usize,

    /// Index into the current stage's exercise list
    pub exercise_index: usize,

    /// Senses revealed so far; ordered for stable serialization
    pub unlocked_senses: BTreeSet<SenseId>,

    /// Pill currently shown in the senses menu (stage 1 only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_sense_pill_id: Option<PillId>,

    /// Set once the final stage has been consumed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Time>,
}

impl ExerciseState {
    /// The cold-boot cursor: stage 0, exercise 0, nothing unlocked.
    pub fn cold_boot() -> Self {
        Self::default()
    }
}

/// Aggregate snapshot of a user's pass over one cluster.
///
/// A mirror of the per-sense records kept for export and diagnostics;
/// the tracker's in-memory records stay authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSession {
    /// Owning user
    pub user_id: UserId,

    /// Cluster being trained
    pub cluster_id: ClusterId,

    /// Progress per sense
    pub sense_progress: HashMap<SenseId, UserSenseProgress>,

    /// Current exercise index within the current stage
    pub current_exercise_index: usize,

    /// Current stage
    pub current_stage: Stage,

    /// Sum of weighted scores across all senses
    pub total_weighted_score: u32,

    /// Senses currently integrated
    pub total_senses_integrated: usize,

    /// Senses currently consolidating
    pub total_senses_consolidating: usize,

    /// Senses still encoding
    pub total_senses_encoding: usize,
}

/// Local user profile, created lazily on first boot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated identifier
    pub id: UserId,

    /// Coarse training-context profile
    pub role_profile: Option<RoleProfile>,

    /// Creation timestamp
    pub created_at: Time,
}

impl User {
    /// Create a fresh profile with a generated id.
    pub fn generate() -> Self {
        Self {
            id: UserId::generate(),
            role_profile: None,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Coarse profile of the training context a user sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleProfile {
    /// Corporate communication
    Corporate,
    /// Academic communication
    Academic,
    /// Founder / investor communication
    Founder,
    /// Student communication
    Student,
}
