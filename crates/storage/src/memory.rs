//! In-memory storage backend.
//!
//! Used by tests and by embedders that have no filesystem. Same record
//! layout as the JSON backend, keyed by suffix.

use std::collections::HashMap;

use async_trait::async_trait;
use preclang_core::{ClusterSession, ExerciseState, SenseId, User, UserSenseProgress};
use tokio::sync::Mutex;

use super::{keys, Result, Store};

/// Volatile storage backend holding records as JSON values.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, suffix: &str) -> Result<Option<T>> {
        let records = self.records.lock().await;
        records
            .get(suffix)
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    async fn set<T: serde::Serialize>(&self, suffix: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.records.lock().await.insert(suffix.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load_user(&self) -> Result<Option<User>> {
        self.get(keys::USER).await
    }

    async fn save_user(&self, user: &User) -> Result<()> {
        self.set(keys::USER, user).await
    }

    async fn load_sense_progress_map(&self) -> Result<HashMap<SenseId, UserSenseProgress>> {
        Ok(self.get(keys::SENSE_PROGRESS).await?.unwrap_or_default())
    }

    async fn save_sense_progress(&self, progress: &UserSenseProgress) -> Result<()> {
        let mut map = self.load_sense_progress_map().await?;
        map.insert(progress.sense_id.clone(), progress.clone());
        self.set(keys::SENSE_PROGRESS, &map).await
    }

    async fn load_exercise_state(&self) -> Result<Option<ExerciseState>> {
        self.get(keys::EXERCISE_STATE).await
    }

    async fn save_exercise_state(&self, state: &ExerciseState) -> Result<()> {
        self.set(keys::EXERCISE_STATE, state).await
    }

    async fn load_cluster_session(&self) -> Result<Option<ClusterSession>> {
        self.get(keys::CLUSTER_SESSION).await
    }

    async fn save_cluster_session(&self, session: &ClusterSession) -> Result<()> {
        self.set(keys::CLUSTER_SESSION, session).await
    }

    async fn clear_all(&self) -> Result<()> {
        self.records.lock().await.clear();
        Ok(())
    }

    async fn export_all(&self) -> Result<serde_json::Value> {
        let records = self.records.lock().await;
        Ok(serde_json::json!({
            "user": records.get(keys::USER),
            "senseProgress": records.get(keys::SENSE_PROGRESS),
            "exerciseState": records.get(keys::EXERCISE_STATE),
            "clusterSession": records.get(keys::CLUSTER_SESSION),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_round_trip_and_clear() {
        let store = MemoryStore::new();
        let user = User::generate();

        store.save_user(&user).await.unwrap();
        let loaded = store.load_user().await.unwrap().unwrap();
        assert_eq!(loaded.id, user.id);

        store.clear_all().await.unwrap();
        assert!(store.load_user().await.unwrap().is_none());
    }
}
