//! Output formatting for the terminal frontend.
//!
//! Maps engine events to either human-readable lines or JSON lines
//! (`--json`). The phase-to-text mapping lives entirely here; the engine
//! knows nothing about presentation.

use crate::engine::EngineEvent;
use crate::types::TimerPhase;

/// Display utilities for terminal output.
pub struct Display {
    json: bool,
}

impl Display {
    /// Creates a display; `json` selects machine-readable output.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints the interactive key reference shown at startup.
    pub fn show_banner(&self) {
        if self.json {
            return;
        }
        println!("pomodorino - 25:00 work / 02:00 break");
        println!("  s/start  start or pause (take the break during an alert)");
        println!("  b/break  start the break");
        println!("  r/reset  back to a fresh work session");
        println!("  q/quit   exit");
    }

    /// Prints a single engine event.
    pub fn show_event(&self, event: &EngineEvent) {
        println!("{}", self.render_event(event));
    }

    /// Renders an engine event to one output line.
    pub fn render_event(&self, event: &EngineEvent) -> String {
        if self.json {
            // EngineEvent serialization is infallible: strings and enums only.
            return serde_json::to_string(event).unwrap_or_default();
        }

        match event {
            EngineEvent::DisplayUpdate { time } => format!("  {}", time),
            EngineEvent::PhaseChanged { phase } => match phase {
                TimerPhase::Work => "-- work session ready, 's' to start --".to_string(),
                TimerPhase::Alert => "** time is up! 'b' to take your break **".to_string(),
                TimerPhase::Break => "-- break started --".to_string(),
            },
            EngineEvent::BlinkTick { blink_on } => {
                format!("  {}", if *blink_on { "[!]" } else { "[ ]" })
            }
        }
    }

    /// Prints an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}
