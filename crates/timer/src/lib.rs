//! Cooperative countdown for timed production exercises.
//!
//! The state machine itself ([`Countdown`]) is pure and synchronous;
//! [`CountdownHandle`] drives it from a 1-second tokio interval and
//! invokes a fire callback exactly once at zero. There is no pause,
//! no restart and no shared state between timers: a countdown either
//! fires or is cancelled, and a new exercise gets a new one.

#![warn(missing_docs)]

mod countdown;
mod handle;

pub use countdown::{Countdown, CountdownStatus, Tick};
pub use handle::CountdownHandle;
