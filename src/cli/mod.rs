//! Terminal frontend for the Pomodoro timer.
//!
//! This module provides the presentation adapter:
//! - `commands`: clap definitions and stdin command parsing
//! - `display`: output formatting for engine events

pub mod commands;
pub mod display;

pub use commands::{parse_command, Cli, Commands, DEFAULT_SOUND_FILE};
pub use display::Display;
