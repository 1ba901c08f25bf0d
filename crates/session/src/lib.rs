//! Session orchestration for preclang.
//!
//! Three layers: pure cursor functions over the catalog
//! ([`sequencer`]), pure answer evaluation ([`evaluator`]), and the
//! stateful [`SessionService`] that wires both to the progress tracker
//! and storage.

#![warn(missing_docs)]

pub mod evaluator;
pub mod sequencer;
mod score;
mod service;

pub use evaluator::{Answer, ChoiceOutcome, EvalError, FreeTextOutcome, Outcome};
pub use score::Scoreboard;
pub use service::SessionService;
