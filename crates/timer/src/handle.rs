//! Tokio-driven countdown runner.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time;

use crate::countdown::{Countdown, CountdownStatus, Tick};

/// Drives a [`Countdown`] on a 1-second interval.
///
/// The spawned ticker owns the fire callback and consumes it on the
/// tick that reaches zero, so the callback runs at most once no matter
/// how the countdown ends. Dropping the handle aborts the ticker.
pub struct CountdownHandle {
    state: Arc<Mutex<Countdown>>,
    ticker: JoinHandle<()>,
}

impl CountdownHandle {
    /// Arm a countdown and start ticking it.
    ///
    /// `on_fire` is invoked from the ticker task when the countdown
    /// reaches zero; an early [`cancel`](Self::cancel) means it is
    /// never invoked.
    pub fn spawn<F>(seconds: u32, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let state = Arc::new(Mutex::new(Countdown::new(seconds)));
        let ticker_state = state.clone();

        let ticker = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; consume it
            // so the countdown loses its first second a full second in.
            interval.tick().await;

            let mut on_fire = Some(on_fire);
            loop {
                interval.tick().await;
                let tick = ticker_state.lock().await.tick();
                match tick {
                    Tick::Running(remaining) => {
                        tracing::debug!(remaining, "countdown tick");
                    }
                    Tick::Fired => {
                        tracing::debug!("countdown fired");
                        if let Some(fire) = on_fire.take() {
                            fire();
                        }
                        break;
                    }
                    Tick::Spent => break,
                }
            }
        });

        Self { state, ticker }
    }

    /// Seconds left.
    pub async fn remaining(&self) -> u32 {
        self.state.lock().await.remaining()
    }

    /// Current lifecycle position.
    pub async fn status(&self) -> CountdownStatus {
        self.state.lock().await.status()
    }

    /// Cancel the countdown (early submission or teardown) and stop
    /// the ticker. A countdown that already fired stays fired.
    pub async fn cancel(&self) {
        if self.state.lock().await.cancel() {
            tracing::debug!("countdown cancelled");
        }
        self.ticker.abort();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_once_at_zero() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let handle = CountdownHandle::spawn(3, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Land between ticks so the assertion is not racing the ticker.
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(handle.status().await, CountdownStatus::Ticking);

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(handle.status().await, CountdownStatus::Fired);
        assert_eq!(handle.remaining().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_callback() {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let handle = CountdownHandle::spawn(5, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(Duration::from_millis(1500)).await;
        handle.cancel().await;
        assert_eq!(handle.status().await, CountdownStatus::Cancelled);

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_fire_does_not_unfire() {
        let handle = CountdownHandle::spawn(1, || {});
        time::sleep(Duration::from_secs(3)).await;
        assert_eq!(handle.status().await, CountdownStatus::Fired);

        handle.cancel().await;
        assert_eq!(handle.status().await, CountdownStatus::Fired);
    }
}
