//! Command definitions for the terminal frontend.
//!
//! Two input surfaces live here:
//! - clap argument parsing for process startup
//! - mapping of interactive stdin lines to engine [`Command`]s

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::engine::Command;

/// Default alert sound file, resolved relative to the working directory.
pub const DEFAULT_SOUND_FILE: &str = "alarm.wav";

// ============================================================================
// Cli
// ============================================================================

/// Pomodoro focus timer with a terminal frontend.
#[derive(Debug, Parser)]
#[command(
    name = "pomodorino",
    version,
    about = "A Pomodoro focus timer: 25 minutes of work, an alert, 2 minutes of break"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable alert sound playback
    #[arg(long)]
    pub no_sound: bool,

    /// Emit engine events as JSON lines instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// Alert sound file to play when a work session ends
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SOUND_FILE)]
    pub sound_file: PathBuf,

    /// Subcommand (the timer runs when none is given)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Interactive input
// ============================================================================

/// Maps an interactive stdin line to an engine command.
///
/// Returns `None` for unrecognized input. Matching is case-insensitive and
/// ignores surrounding whitespace.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "s" | "start" | "p" | "pause" => Some(Command::ToggleStart),
        "r" | "reset" => Some(Command::Reset),
        "b" | "break" => Some(Command::BeginBreak),
        "q" | "quit" | "exit" => Some(Command::Shutdown),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
