//! preclang core data models.
//!
//! This crate defines the data structures shared across the trainer:
//! lexical reference data (clusters, senses, pills), exercise catalog
//! entries, and per-user progress and session records.

#![warn(missing_docs)]

// Core identities
mod id;

// Lexical reference data
mod cluster;
mod sense;

// Exercise catalog entries
mod exercise;

// User progress and session state
mod progress;
mod session;

// Re-exports
pub use id::{ClusterId, ExerciseId, PillId, SenseId, UserId};

pub use cluster::Cluster;
pub use sense::{Pill, Sense, TemperatureLevel, TemporalCondition};

pub use exercise::{
    Exercise, ExerciseContext, ExerciseFeedback, FeedbackPath, FreeTextExercise, Medium,
    MultiChoiceExercise, Stage,
};

pub use progress::{IntegrationStatus, UserSenseProgress};
pub use session::{ClusterSession, ExerciseState, RoleProfile, User};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
