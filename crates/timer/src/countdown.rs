//! Pure countdown state machine.

/// Lifecycle position of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// Created, no tick consumed yet
    Armed,
    /// At least one tick consumed, seconds remain
    Ticking,
    /// Reached zero; terminal
    Fired,
    /// Cancelled before reaching zero; terminal
    Cancelled,
}

/// Outcome of one [`Countdown::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; seconds left
    Running(u32),
    /// This tick reached zero. Reported exactly once.
    Fired,
    /// The countdown was already terminal; the tick did nothing
    Spent,
}

/// Whole-second countdown, decremented externally.
///
/// Terminal states are absorbing: ticking a fired or cancelled
/// countdown reports [`Tick::Spent`] and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    status: CountdownStatus,
}

impl Countdown {
    /// Arm a countdown with the given number of whole seconds.
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            status: CountdownStatus::Armed,
        }
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Current lifecycle position.
    pub fn status(&self) -> CountdownStatus {
        self.status
    }

    /// Whether the countdown can still tick or be cancelled.
    pub fn is_live(&self) -> bool {
        matches!(
            self.status,
            CountdownStatus::Armed | CountdownStatus::Ticking
        )
    }

    /// Consume one second.
    pub fn tick(&mut self) -> Tick {
        if !self.is_live() {
            return Tick::Spent;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.status = CountdownStatus::Fired;
            Tick::Fired
        } else {
            self.status = CountdownStatus::Ticking;
            Tick::Running(self.remaining)
        }
    }

    /// Cancel a live countdown. Returns whether this call did the
    /// cancelling; terminal states are unaffected.
    pub fn cancel(&mut self) -> bool {
        if self.is_live() {
            self.status = CountdownStatus::Cancelled;
            true
        } else {
            false
        }
    }
}
