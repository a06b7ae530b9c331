//! One-second countdown signal source.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use super::Signal;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Fires [`Signal::CountdownTick`] once per second while active.
///
/// The clock knows nothing about what a tick means; that logic lives in the
/// state machine. `start` and `stop` are idempotent, so phase transitions
/// can issue them without checking the current status first.
pub struct CountdownClock {
    signal_tx: mpsc::UnboundedSender<Signal>,
    task: Option<JoinHandle<()>>,
}

impl CountdownClock {
    /// Creates a stopped clock that will send ticks into the given channel.
    pub fn new(signal_tx: mpsc::UnboundedSender<Signal>) -> Self {
        Self {
            signal_tx,
            task: None,
        }
    }

    /// Starts ticking. No-op (no double fire) if already running.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let tx = self.signal_tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(TICK_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it so
            // the first countdown tick arrives a full second after start.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tx.send(Signal::CountdownTick).is_err() {
                    break;
                }
            }
        }));
        debug!("Countdown clock started");
    }

    /// Stops ticking. No-op if already stopped.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Countdown clock stopped");
        }
    }

    /// Returns true if the clock is actively ticking.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for CountdownClock {
    fn drop(&mut self) {
        self.stop();
    }
}
