//! The Work → Alert → Break state machine.
//!
//! This is the only component a frontend talks to. It owns the timer
//! state, both periodic signal sources, and the sound player, and it is
//! the single place where state is mutated: every command and every tick
//! arrives through one channel and is handled in order.
//!
//! The cycle: a 25 minute work countdown expires into a zero-duration
//! alert (blinking, sound playing) that persists until the user
//! acknowledges it, which starts a 2 minute break; an expired break
//! resets to a fresh work session.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::sound::SoundPlayer;
use crate::types::{format_time, TimerPhase, TimerState};

use super::{BlinkOscillator, Command, CountdownClock, EngineEvent, Signal};

/// The Pomodoro state machine.
///
/// Generic over the sound player so tests can substitute a mock.
pub struct PomodoroStateMachine<S: SoundPlayer> {
    /// The sole mutable timer state
    state: TimerState,
    /// One-second countdown signal source
    clock: CountdownClock,
    /// 500 ms blink signal source
    blink: BlinkOscillator,
    /// Best-effort alert sound playback
    sound: S,
    /// Path of the alert sound file
    sound_file: PathBuf,
    /// Serialized inbound signals (commands and ticks)
    signal_rx: mpsc::UnboundedReceiver<Signal>,
    /// Outward event stream consumed by the presentation layer
    event_tx: mpsc::UnboundedSender<EngineEvent>,
}

impl<S: SoundPlayer> PomodoroStateMachine<S> {
    /// Creates a new state machine.
    ///
    /// Returns the machine together with the signal sender a frontend uses
    /// to submit [`Command`]s (wrapped in [`Signal::Command`]).
    pub fn new(
        sound: S,
        sound_file: PathBuf,
        event_tx: mpsc::UnboundedSender<EngineEvent>,
    ) -> (Self, mpsc::UnboundedSender<Signal>) {
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();

        let machine = Self {
            state: TimerState::new(),
            clock: CountdownClock::new(signal_tx.clone()),
            blink: BlinkOscillator::new(signal_tx.clone()),
            sound,
            sound_file,
            signal_rx,
            event_tx,
        };

        (machine, signal_tx)
    }

    /// Runs the dispatch loop until a [`Command::Shutdown`] arrives or the
    /// signal channel closes.
    ///
    /// Emits one initial display-update and phase-changed pair so a fresh
    /// subscriber has something to paint.
    pub async fn run(&mut self) -> Result<()> {
        self.emit_phase_changed()?;
        self.emit_display_update()?;

        while let Some(signal) = self.signal_rx.recv().await {
            if signal == Signal::Command(Command::Shutdown) {
                self.teardown();
                break;
            }
            self.handle_signal(signal)?;
        }

        Ok(())
    }

    /// Handles a single serialized signal.
    pub fn handle_signal(&mut self, signal: Signal) -> Result<()> {
        match signal {
            Signal::Command(Command::ToggleStart) => self.toggle_start(),
            Signal::Command(Command::Reset) => self.reset(),
            Signal::Command(Command::BeginBreak) => self.begin_break(),
            Signal::Command(Command::Shutdown) => {
                self.teardown();
                Ok(())
            }
            Signal::CountdownTick => self.on_countdown_tick(),
            Signal::BlinkTick => self.on_blink_tick(),
        }
    }

    /// Starts or pauses the countdown.
    ///
    /// During an alert this is the "take your break" action and behaves
    /// exactly like [`begin_break`](Self::begin_break); the frontend keeps
    /// a single control with context-dependent meaning.
    pub fn toggle_start(&mut self) -> Result<()> {
        if self.state.phase == TimerPhase::Alert {
            return self.begin_break();
        }

        if self.state.is_running {
            self.clock.stop();
            debug!("Countdown paused at {}", self.state.remaining_seconds);
        } else {
            self.clock.start();
            debug!("Countdown started at {}", self.state.remaining_seconds);
        }
        self.state.is_running = !self.state.is_running;

        Ok(())
    }

    /// Returns to a fresh, stopped work session. Always succeeds.
    pub fn reset(&mut self) -> Result<()> {
        self.sound.stop();
        self.clock.stop();
        self.blink.stop();
        self.state.reset();

        info!("Timer reset");
        self.emit_phase_changed()?;
        self.emit_display_update()?;
        Ok(())
    }

    /// Acknowledges an alert and starts the break countdown.
    ///
    /// No-op outside the alert phase, guarding against spurious calls from
    /// a stale frontend.
    pub fn begin_break(&mut self) -> Result<()> {
        if self.state.phase != TimerPhase::Alert {
            return Ok(());
        }

        self.sound.stop();
        self.blink.stop();
        self.state.begin_break();
        self.clock.start();

        info!("Break started");
        self.emit_phase_changed()?;
        self.emit_display_update()?;
        Ok(())
    }

    /// Handles one second elapsing on the countdown clock.
    fn on_countdown_tick(&mut self) -> Result<()> {
        // A tick may still be queued from before a stop; ignore it.
        if !self.state.is_running {
            return Ok(());
        }

        let expired = self.state.tick();
        self.emit_display_update()?;

        if expired {
            self.clock.stop();
            self.state.is_running = false;

            match self.state.phase {
                TimerPhase::Work => self.enter_alert()?,
                // The only self-triggered automatic reset.
                TimerPhase::Break => self.reset()?,
                TimerPhase::Alert => {}
            }
        }

        Ok(())
    }

    /// Handles a blink oscillator firing: toggles the output and emits it.
    fn on_blink_tick(&mut self) -> Result<()> {
        if !self.state.is_blinking {
            return Ok(());
        }

        self.state.blink_on = !self.state.blink_on;
        self.event_tx
            .send(EngineEvent::BlinkTick {
                blink_on: self.state.blink_on,
            })
            .context("Failed to send blink event")?;
        Ok(())
    }

    /// Enters the alert phase: blinking on, best-effort sound, display
    /// frozen at `00:00`.
    fn enter_alert(&mut self) -> Result<()> {
        self.state.enter_alert();
        self.blink.start();

        if let Err(e) = self.sound.play(&self.sound_file) {
            // Playback is best-effort; the alert proceeds without audio.
            debug!("Alert sound unavailable: {}", e);
        }

        info!("Work session complete, alert raised");
        self.emit_phase_changed()?;
        self.emit_display_update()?;
        Ok(())
    }

    /// Stops sound and both timers without touching the state. Used on
    /// shutdown so the process exits with no stray children or tasks.
    fn teardown(&mut self) {
        self.sound.stop();
        self.clock.stop();
        self.blink.stop();
        debug!("Engine torn down");
    }

    fn emit_display_update(&self) -> Result<()> {
        self.event_tx
            .send(EngineEvent::DisplayUpdate {
                time: format_time(self.state.remaining_seconds),
            })
            .context("Failed to send display event")
    }

    fn emit_phase_changed(&self) -> Result<()> {
        self.event_tx
            .send(EngineEvent::PhaseChanged {
                phase: self.state.phase,
            })
            .context("Failed to send phase event")
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
