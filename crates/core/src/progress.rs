//! Per-sense mastery records.

use serde::{Deserialize, Serialize};

use crate::id::{ClusterId, SenseId, UserId};
use crate::Time;

/// Mastery state of a sense for a given user.
///
/// One-directional: encoding -> consolidating -> integrated, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationStatus {
    /// Initial noticing phase; sense not yet unlocked
    Encoding,
    /// Unlocked for retrieval practice
    Consolidating,
    /// Fully integrated
    Integrated,
}

/// The mutable mastery record, one per (user, sense).
///
/// Counters only ever increase and the status never regresses. Created
/// lazily on first encounter, mutated only through the record-success
/// transitions, deleted only by a full data reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSenseProgress {
    /// Record identifier, derived from user and sense
    pub id: String,

    /// Owning user
    pub user_id: UserId,

    /// The sense being tracked
    pub sense_id: SenseId,

    /// Cluster the sense belongs to
    pub cluster_id: ClusterId,

    /// Correct stage-1 attempts
    pub stage1_encounters: u32,

    /// Successful stage-2 overrides (precision variant chosen over the
    /// placeholder, not merely a correct answer)
    pub stage2_overrides: u32,

    /// Correct stage-3 productions
    pub stage3_successes: u32,

    /// Stage1(+1) + Stage2(+2) + Stage3(+3)
    pub total_weighted_score: u32,

    /// Current state-machine position
    pub integration_status: IntegrationStatus,

    /// Last time any counter moved
    pub last_encounter_at: Time,

    /// Creation timestamp
    pub created_at: Time,
}

impl UserSenseProgress {
    /// Fresh record in the default zero state with status `Encoding`.
    pub fn new(user_id: UserId, cluster_id: ClusterId, sense_id: SenseId) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: format!("prog-{}-{}", user_id, sense_id),
            user_id,
            sense_id,
            cluster_id,
            stage1_encounters: 0,
            stage2_overrides: 0,
            stage3_successes: 0,
            total_weighted_score: 0,
            integration_status: IntegrationStatus::Encoding,
            last_encounter_at: now,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_zeroed_and_encoding() {
        let p = UserSenseProgress::new(
            UserId::new("user-1"),
            ClusterId::new("contact-cluster"),
            SenseId::new("reach-out"),
        );
        assert_eq!(p.id, "prog-user-1-reach-out");
        assert_eq!(p.stage1_encounters, 0);
        assert_eq!(p.stage2_overrides, 0);
        assert_eq!(p.stage3_successes, 0);
        assert_eq!(p.total_weighted_score, 0);
        assert_eq!(p.integration_status, IntegrationStatus::Encoding);
    }

    #[test]
    fn status_ordering_matches_progression() {
        assert!(IntegrationStatus::Encoding < IntegrationStatus::Consolidating);
        assert!(IntegrationStatus::Consolidating < IntegrationStatus::Integrated);
    }
}
