//! Stateful progress tracking service.

use std::collections::HashMap;
use std::sync::Arc;

use preclang_core::{ClusterId, IntegrationStatus, SenseId, UserId, UserSenseProgress};
use preclang_storage::Store;

use crate::transitions;

/// Owns the per-sense mastery records for one user and cluster.
///
/// The in-memory map is authoritative. Records are created lazily on
/// first encounter and written through to storage after every
/// transition; a failed write is logged and otherwise ignored, so a
/// broken backend degrades to session-only tracking instead of
/// blocking practice.
pub struct SenseProgressTracker<S: Store> {
    store: Arc<S>,
    user_id: UserId,
    cluster_id: ClusterId,
    records: HashMap<SenseId, UserSenseProgress>,
}

impl<S: Store> SenseProgressTracker<S> {
    /// Build a tracker, hydrating existing records from storage.
    ///
    /// A load failure starts the tracker empty, matching the cold-boot
    /// behavior of the rest of the persistence layer.
    pub async fn hydrate(store: Arc<S>, user_id: UserId, cluster_id: ClusterId) -> Self {
        let records = match store.load_sense_progress_map().await {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(%err, "failed to load sense progress, starting fresh");
                HashMap::new()
            }
        };

        Self {
            store,
            user_id,
            cluster_id,
            records,
        }
    }

    /// Record for a sense, if one exists yet.
    pub fn get(&self, sense_id: &SenseId) -> Option<&UserSenseProgress> {
        self.records.get(sense_id)
    }

    /// All records, keyed by sense.
    pub fn records(&self) -> &HashMap<SenseId, UserSenseProgress> {
        &self.records
    }

    /// Whether a sense is unlocked for stage-2 practice. A sense with
    /// no record yet is locked.
    pub fn is_unlocked(&self, sense_id: &SenseId) -> bool {
        self.records
            .get(sense_id)
            .map(transitions::is_unlocked)
            .unwrap_or(false)
    }

    /// Count of records currently in the given status.
    pub fn count_in_status(&self, status: IntegrationStatus) -> u32 {
        self.records
            .values()
            .filter(|r| r.integration_status == status)
            .count() as u32
    }

    /// Sum of weighted scores across all tracked senses.
    pub fn total_weighted_score(&self) -> u32 {
        self.records.values().map(|r| r.total_weighted_score).sum()
    }

    /// Record a correct stage-1 answer for a sense.
    pub async fn record_stage1_success(&mut self, sense_id: &SenseId) -> &UserSenseProgress {
        self.apply(sense_id, transitions::apply_stage1_success).await
    }

    /// Record a successful stage-2 override for a sense.
    pub async fn record_stage2_override(&mut self, sense_id: &SenseId) -> &UserSenseProgress {
        self.apply(sense_id, transitions::apply_stage2_override).await
    }

    /// Record a successful stage-3 production for a sense.
    pub async fn record_stage3_success(&mut self, sense_id: &SenseId) -> &UserSenseProgress {
        self.apply(sense_id, transitions::apply_stage3_success).await
    }

    async fn apply(
        &mut self,
        sense_id: &SenseId,
        transition: fn(&mut UserSenseProgress, preclang_core::Time),
    ) -> &UserSenseProgress {
        let record = self.records.entry(sense_id.clone()).or_insert_with(|| {
            UserSenseProgress::new(
                self.user_id.clone(),
                self.cluster_id.clone(),
                sense_id.clone(),
            )
        });
        transition(record, chrono::Utc::now());

        let snapshot = record.clone();
        if let Err(err) = self.store.save_sense_progress(&snapshot).await {
            tracing::warn!(%err, sense = %sense_id, "failed to persist sense progress");
        }

        &self.records[sense_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use preclang_core::{ClusterSession, ExerciseState, User};
    use preclang_storage::{MemoryStore, Result, StorageError};

    fn ids() -> (UserId, ClusterId) {
        (UserId::new("user-1"), ClusterId::new("contact-cluster"))
    }

    #[tokio::test]
    async fn lazy_record_creation_and_persistence() {
        let store = Arc::new(MemoryStore::new());
        let (user_id, cluster_id) = ids();
        let mut tracker =
            SenseProgressTracker::hydrate(store.clone(), user_id.clone(), cluster_id.clone())
                .await;

        let sense = SenseId::new("reach-out");
        assert!(tracker.get(&sense).is_none());

        let record = tracker.record_stage1_success(&sense).await;
        assert_eq!(record.stage1_encounters, 1);
        assert_eq!(record.total_weighted_score, 1);

        // A fresh tracker over the same store sees the write.
        let rehydrated = SenseProgressTracker::hydrate(store, user_id, cluster_id).await;
        assert_eq!(rehydrated.get(&sense).unwrap().stage1_encounters, 1);
    }

    #[tokio::test]
    async fn unlock_and_status_counts_follow_transitions() {
        let store = Arc::new(MemoryStore::new());
        let (user_id, cluster_id) = ids();
        let mut tracker = SenseProgressTracker::hydrate(store, user_id, cluster_id).await;

        let sense = SenseId::new("chase-up");
        for _ in 0..3 {
            tracker.record_stage1_success(&sense).await;
        }

        assert!(tracker.is_unlocked(&sense));
        assert_eq!(tracker.count_in_status(IntegrationStatus::Consolidating), 1);
        assert_eq!(tracker.count_in_status(IntegrationStatus::Encoding), 0);
        assert_eq!(tracker.total_weighted_score(), 3);
    }

    struct FailingStore;

    #[async_trait]
    impl Store for FailingStore {
        async fn load_user(&self) -> Result<Option<User>> {
            Ok(None)
        }
        async fn save_user(&self, _user: &User) -> Result<()> {
            Err(StorageError::Other("disk full".to_string()))
        }
        async fn load_sense_progress_map(&self) -> Result<HashMap<SenseId, UserSenseProgress>> {
            Err(StorageError::Other("disk full".to_string()))
        }
        async fn save_sense_progress(&self, _progress: &UserSenseProgress) -> Result<()> {
            Err(StorageError::Other("disk full".to_string()))
        }
        async fn load_exercise_state(&self) -> Result<Option<ExerciseState>> {
            Ok(None)
        }
        async fn save_exercise_state(&self, _state: &ExerciseState) -> Result<()> {
            Err(StorageError::Other("disk full".to_string()))
        }
        async fn load_cluster_session(&self) -> Result<Option<ClusterSession>> {
            Ok(None)
        }
        async fn save_cluster_session(&self, _session: &ClusterSession) -> Result<()> {
            Err(StorageError::Other("disk full".to_string()))
        }
        async fn clear_all(&self) -> Result<()> {
            Err(StorageError::Other("disk full".to_string()))
        }
        async fn export_all(&self) -> Result<serde_json::Value> {
            Err(StorageError::Other("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn persistence_failure_keeps_the_in_memory_record() {
        let (user_id, cluster_id) = ids();
        let mut tracker =
            SenseProgressTracker::hydrate(Arc::new(FailingStore), user_id, cluster_id).await;

        let sense = SenseId::new("consult");
        tracker.record_stage3_success(&sense).await;
        tracker.record_stage3_success(&sense).await;

        let record = tracker.get(&sense).unwrap();
        assert_eq!(record.stage3_successes, 2);
        assert_eq!(record.total_weighted_score, 6);
    }
}
