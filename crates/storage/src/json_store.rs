//! JSON file storage implementation.
//!
//! Stores one pretty-printed JSON file per namespaced key under a root
//! directory, e.g. `precision-lang-exercise-state.json`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use preclang_core::{ClusterSession, ExerciseState, SenseId, User, UserSenseProgress};
use tokio::fs;

use super::{keys, Result, Store, STORAGE_PREFIX};

/// File-based JSON storage backend.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn key_path(&self, suffix: &str) -> PathBuf {
        self.root.join(format!("{}{}.json", STORAGE_PREFIX, suffix))
    }

    async fn read_record<T: serde::de::DeserializeOwned>(&self, suffix: &str) -> Result<Option<T>> {
        match fs::read_to_string(self.key_path(suffix)).await {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    // Unparseable records read back as absent (cold start).
                    tracing::warn!(key = suffix, error = %err, "discarding unparseable record");
                    Ok(None)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_record<T: serde::Serialize>(&self, suffix: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(suffix), json.as_bytes()).await?;
        Ok(())
    }

    async fn remove_record(&self, suffix: &str) -> Result<()> {
        fs::remove_file(self.key_path(suffix)).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Ok(())
            } else {
                Err(e)
            }
        })?;
        Ok(())
    }
}

#[async_trait]
impl Store for JsonStore {
    async fn load_user(&self) -> Result<Option<User>> {
        self.read_record(keys::USER).await
    }

    async fn save_user(&self, user: &User) -> Result<()> {
        self.write_record(keys::USER, user).await
    }

    async fn load_sense_progress_map(&self) -> Result<HashMap<SenseId, UserSenseProgress>> {
        Ok(self
            .read_record(keys::SENSE_PROGRESS)
            .await?
            .unwrap_or_default())
    }

    async fn save_sense_progress(&self, progress: &UserSenseProgress) -> Result<()> {
        let mut map = self.load_sense_progress_map().await?;
        map.insert(progress.sense_id.clone(), progress.clone());
        self.write_record(keys::SENSE_PROGRESS, &map).await
    }

    async fn load_exercise_state(&self) -> Result<Option<ExerciseState>> {
        self.read_record(keys::EXERCISE_STATE).await
    }

    async fn save_exercise_state(&self, state: &ExerciseState) -> Result<()> {
        self.write_record(keys::EXERCISE_STATE, state).await
    }

    async fn load_cluster_session(&self) -> Result<Option<ClusterSession>> {
        self.read_record(keys::CLUSTER_SESSION).await
    }

    async fn save_cluster_session(&self, session: &ClusterSession) -> Result<()> {
        self.write_record(keys::CLUSTER_SESSION, session).await
    }

    async fn clear_all(&self) -> Result<()> {
        for suffix in keys::ALL {
            self.remove_record(suffix).await?;
        }
        Ok(())
    }

    async fn export_all(&self) -> Result<serde_json::Value> {
        let user = self.load_user().await?;
        let sense_progress = self.load_sense_progress_map().await?;
        let exercise_state = self.load_exercise_state().await?;
        let cluster_session = self.load_cluster_session().await?;

        Ok(serde_json::json!({
            "user": user,
            "senseProgress": sense_progress,
            "exerciseState": exercise_state,
            "clusterSession": cluster_session,
        }))
    }
}
