//! 500 ms blink signal source for the alert phase.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use super::Signal;

/// Interval between blink toggles.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Fires [`Signal::BlinkTick`] every 500 ms while active.
///
/// Drives the visual pulse during the alert phase and nothing else; the
/// toggled boolean itself lives in the timer state. Independent of the
/// countdown clock.
pub struct BlinkOscillator {
    signal_tx: mpsc::UnboundedSender<Signal>,
    task: Option<JoinHandle<()>>,
}

impl BlinkOscillator {
    /// Creates a stopped oscillator sending into the given channel.
    pub fn new(signal_tx: mpsc::UnboundedSender<Signal>) -> Self {
        Self {
            signal_tx,
            task: None,
        }
    }

    /// Starts firing. No-op if already running.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let tx = self.signal_tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(BLINK_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tx.send(Signal::BlinkTick).is_err() {
                    break;
                }
            }
        }));
        debug!("Blink oscillator started");
    }

    /// Stops firing. No-op if already stopped.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Blink oscillator stopped");
        }
    }

    /// Returns true if the oscillator is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for BlinkOscillator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_start_stop_flags() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut blink = BlinkOscillator::new(tx);

        assert!(!blink.is_active());
        blink.start();
        assert!(blink.is_active());
        blink.stop();
        assert!(!blink.is_active());
    }

    #[tokio::test]
    async fn test_double_start_does_not_double_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut blink = BlinkOscillator::new(tx);

        blink.start();
        blink.start();

        sleep(Duration::from_millis(800)).await;
        blink.stop();

        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 1, "expected a single blink tick, got {}", ticks);
    }

    #[tokio::test]
    async fn test_independent_of_countdown_cadence() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut blink = BlinkOscillator::new(tx);

        blink.start();
        sleep(Duration::from_millis(1300)).await;
        blink.stop();

        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        // Two full 500 ms intervals fit in 1.3 s (±1 for scheduling).
        assert!((1..=3).contains(&ticks), "expected ~2 ticks, got {}", ticks);
    }
}
