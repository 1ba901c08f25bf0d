//! Cluster model - a themed lexical field of senses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::{ClusterId, SenseId};
use crate::sense::{Pill, Sense};

/// A themed group of related senses sharing a base word.
///
/// Includes the placeholder sense plus its precision variants, and the
/// pill lookup for the variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Unique slug identifier
    pub id: ClusterId,

    /// Display name, e.g. "CONTACT"
    pub name: String,

    /// Description
    pub description: String,

    /// All senses in this cluster, placeholder included
    pub senses: Vec<Sense>,

    /// Pills by sense id (precision variants only)
    pub pills: HashMap<SenseId, Pill>,

    /// The neutral/fluent baseline sense
    pub base_placeholder_sense_id: SenseId,
}

impl Cluster {
    /// Look up a sense by id.
    pub fn sense(&self, id: &SenseId) -> Option<&Sense> {
        self.senses.iter().find(|s| &s.id == id)
    }

    /// Look up the pill for a sense, if the sense has one.
    pub fn pill_for(&self, id: &SenseId) -> Option<&Pill> {
        self.pills.get(id)
    }

    /// The placeholder sense itself.
    pub fn placeholder(&self) -> Option<&Sense> {
        self.sense(&self.base_placeholder_sense_id)
    }
}
