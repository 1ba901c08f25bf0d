//! Identifiers for preclang entities.
//!
//! Catalog entities (clusters, senses, exercises, pills) carry
//! human-readable slug ids fixed at authoring time. User ids are
//! generated locally on first boot.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier of a lexical sense, e.g. `"reach-out"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenseId(String);

impl SenseId {
    /// Create from an authored slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SenseId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// Identifier of a cluster, e.g. `"contact-cluster"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(String);

impl ClusterId {
    /// Create from an authored slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ClusterId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// Identifier of a catalog exercise, e.g. `"s1-e1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(String);

impl ExerciseId {
    /// Create from an authored slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ExerciseId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// Identifier of a pill, e.g. `"pill-reach-out"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillId(String);

impl PillId {
    /// Create from an authored slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PillId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

/// Identifier of a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh user id
    pub fn generate() -> Self {
        Self(format!("user-{}", Ulid::new()))
    }

    /// Create from an existing id string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
