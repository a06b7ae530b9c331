//! Pomodorino - a headless Pomodoro focus-timer state machine.
//!
//! This library provides:
//! - The Work → Alert → Break state machine with a one-second countdown
//!   and a 500 ms blink oscillator for the alert phase
//! - Best-effort alert sound playback via an external player process
//! - A terminal presentation adapter (command parsing and event display)
//! - Type definitions for timer state and display formatting
//!
//! The engine is fully headless: it consumes commands, emits events, and
//! never touches the screen, so it can be tested with no UI at all.

pub mod cli;
pub mod engine;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use engine::{
    BlinkOscillator, Command, CountdownClock, EngineEvent, PomodoroStateMachine, Signal,
};
pub use sound::{MockSoundPlayer, NullSoundPlayer, ProcessSoundPlayer, SoundError, SoundPlayer};
pub use types::{format_time, TimerPhase, TimerState, BREAK_SECONDS, WORK_SECONDS};
