//! Storage trait abstraction.

use std::collections::HashMap;

use async_trait::async_trait;
use preclang_core::{ClusterSession, ExerciseState, SenseId, User, UserSenseProgress};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Fixed namespace prefix for all persisted records.
pub const STORAGE_PREFIX: &str = "precision-lang-";

/// Key suffixes under the namespace.
pub mod keys {
    /// User profile record
    pub const USER: &str = "user";
    /// Map of sense id to progress record
    pub const SENSE_PROGRESS: &str = "sense-progress";
    /// Exercise cursor record
    pub const EXERCISE_STATE: &str = "exercise-state";
    /// Aggregate session snapshot
    pub const CLUSTER_SESSION: &str = "cluster-session";

    /// All suffixes, in layout order.
    pub const ALL: [&str; 4] = [USER, SENSE_PROGRESS, EXERCISE_STATE, CLUSTER_SESSION];
}

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Persistence boundary for trainer records.
///
/// String-keyed, JSON-valued records under the [`STORAGE_PREFIX`]
/// namespace. No transactions, single reader/writer. Loads never surface
/// corruption to the caller: a missing or unparseable record reads back
/// as absent, forcing a cold start for that record.
#[async_trait]
pub trait Store: Send + Sync {
    // === User profile ===

    /// Load the user profile.
    async fn load_user(&self) -> Result<Option<User>>;

    /// Save the user profile.
    async fn save_user(&self, user: &User) -> Result<()>;

    // === Sense progress ===

    /// Load all sense progress records.
    async fn load_sense_progress_map(&self) -> Result<HashMap<SenseId, UserSenseProgress>>;

    /// Save one sense progress record into the stored map.
    async fn save_sense_progress(&self, progress: &UserSenseProgress) -> Result<()>;

    // === Exercise cursor ===

    /// Load the exercise cursor.
    async fn load_exercise_state(&self) -> Result<Option<ExerciseState>>;

    /// Save the exercise cursor.
    async fn save_exercise_state(&self, state: &ExerciseState) -> Result<()>;

    // === Aggregate session snapshot ===

    /// Load the aggregate session snapshot.
    async fn load_cluster_session(&self) -> Result<Option<ClusterSession>>;

    /// Save the aggregate session snapshot.
    async fn save_cluster_session(&self, session: &ClusterSession) -> Result<()>;

    // === Maintenance ===

    /// Delete every record under the namespace, forcing a cold boot.
    async fn clear_all(&self) -> Result<()>;

    /// Dump all namespaced records as a single JSON document.
    async fn export_all(&self) -> Result<serde_json::Value>;
}
