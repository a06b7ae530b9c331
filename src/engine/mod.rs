//! Timer engine for the Pomodoro timer.
//!
//! This module contains the headless core:
//! - `clock`: one-second countdown signal source
//! - `oscillator`: 500 ms blink signal source
//! - `machine`: the Work → Alert → Break state machine
//!
//! Everything that mutates [`TimerState`](crate::types::TimerState) is
//! serialized through a single signal channel consumed by the state
//! machine, so ticks and commands never race each other.

pub mod clock;
pub mod machine;
pub mod oscillator;

use serde::Serialize;

use crate::types::TimerPhase;

pub use clock::CountdownClock;
pub use machine::PomodoroStateMachine;
pub use oscillator::BlinkOscillator;

// ============================================================================
// Command
// ============================================================================

/// Commands a frontend may issue into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start or pause the countdown; during an alert, begins the break
    ToggleStart,
    /// Return to a fresh, stopped work session
    Reset,
    /// Acknowledge an alert and start the break countdown
    BeginBreak,
    /// Tear down timers and sound, then exit the run loop
    Shutdown,
}

// ============================================================================
// Signal
// ============================================================================

/// Inputs serialized onto the state machine's single dispatch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A frontend command
    Command(Command),
    /// One second elapsed on the countdown clock
    CountdownTick,
    /// The blink oscillator fired
    BlinkTick,
}

// ============================================================================
// EngineEvent
// ============================================================================

/// Outward events emitted by the state machine.
///
/// These are the machine's only externally observable side effects besides
/// the state accessor; a presentation layer maps them to text, color, and
/// icon choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// The remaining time changed
    DisplayUpdate {
        /// Remaining time formatted as `MM:SS`
        time: String,
    },
    /// The timer entered a new phase
    PhaseChanged {
        /// The phase just entered
        phase: TimerPhase,
    },
    /// The blink oscillator toggled its output
    BlinkTick {
        /// Current oscillator output
        blink_on: bool,
    },
}
