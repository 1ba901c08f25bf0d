//! Per-sense mastery tracking for preclang.
//!
//! Splits into pure transition rules ([`transitions`]) and the stateful
//! [`SenseProgressTracker`] that owns the in-memory records and persists
//! them after every transition.

#![warn(missing_docs)]

pub mod transitions;
mod tracker;

pub use tracker::SenseProgressTracker;
