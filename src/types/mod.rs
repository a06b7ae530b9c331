//! Core data types for the Pomodoro timer.
//!
//! This module defines the data structures used for:
//! - The three-phase timer cycle (Work → Alert → Break)
//! - Timer state and its pure transitions
//! - Display formatting

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Duration of a work session in seconds (25 minutes).
pub const WORK_SECONDS: u32 = 25 * 60;

/// Duration of a break in seconds (2 minutes).
pub const BREAK_SECONDS: u32 = 2 * 60;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Counting down a work session
    Work,
    /// Work session finished, waiting for the user to start the break
    Alert,
    /// Counting down a break
    Break,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Work => "work",
            TimerPhase::Alert => "alert",
            TimerPhase::Break => "break",
        }
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Work
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the timer.
///
/// The state is owned and mutated exclusively by the
/// [`PomodoroStateMachine`](crate::engine::PomodoroStateMachine); everything
/// else reads it through accessors or the outward event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the cycle
    pub phase: TimerPhase,
    /// Remaining seconds in the current phase
    pub remaining_seconds: u32,
    /// Whether the countdown clock is actively ticking
    pub is_running: bool,
    /// Whether the blink oscillator is active (Alert phase only)
    pub is_blinking: bool,
    /// Current oscillator output; only meaningful while blinking
    pub blink_on: bool,
}

impl TimerState {
    /// Creates the initial state: a fresh, stopped work session.
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Work,
            remaining_seconds: WORK_SECONDS,
            is_running: false,
            is_blinking: false,
            blink_on: false,
        }
    }

    /// Resets to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Enters the alert phase: display frozen at zero, blinking on.
    pub fn enter_alert(&mut self) {
        self.phase = TimerPhase::Alert;
        self.remaining_seconds = 0;
        self.is_running = false;
        self.is_blinking = true;
        self.blink_on = true;
    }

    /// Enters the break phase with a running countdown.
    pub fn begin_break(&mut self) {
        self.phase = TimerPhase::Break;
        self.remaining_seconds = BREAK_SECONDS;
        self.is_running = true;
        self.is_blinking = false;
        self.blink_on = false;
    }

    /// Decrements the counter by one second.
    ///
    /// Returns true if the counter has reached zero, i.e. the phase expired
    /// on this tick. The counter never goes negative.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a second count as a zero-padded `MM:SS` string.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================
