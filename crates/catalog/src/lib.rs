//! Static exercise catalog for preclang.
//!
//! The catalog is an ordered, nested list of stages and exercises, fully
//! determined at build time and never mutated. Authoring invariants are
//! checked by [`ExerciseCatalog::validate`] at content-creation time, not
//! defended at runtime.

#![warn(missing_docs)]

mod catalog;
mod contact;

pub use catalog::{CatalogError, ExerciseCatalog, StageExercises};
pub use contact::{contact_catalog, contact_cluster};
