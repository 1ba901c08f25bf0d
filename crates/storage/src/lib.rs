//! Storage abstraction and implementations for preclang.
//!
//! This crate provides the trait-based persistence boundary with a
//! JSON-file reference implementation and an in-memory backend.

#![warn(missing_docs)]

pub mod json_store;
pub mod memory;
pub mod trait_;

pub use json_store::JsonStore;
pub use memory::MemoryStore;
pub use trait_::{keys, Result, StorageError, Store, STORAGE_PREFIX};
