//! Pomodorino - a Pomodoro focus timer for the terminal
//!
//! The cycle:
//! - 25 minutes of focused work
//! - an alert (blinking, sound) until the break is acknowledged
//! - 2 minutes of break, then back to a fresh work session

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use pomodorino::cli::{parse_command, Cli, Commands, Display};
use pomodorino::engine::{Command, PomodoroStateMachine, Signal};
use pomodorino::sound::{NullSoundPlayer, ProcessSoundPlayer, SoundPlayer};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
            Ok(())
        }
        None => run_timer(cli).await,
    }
}

/// Runs the interactive timer until quit or Ctrl-C.
async fn run_timer(cli: Cli) -> Result<()> {
    let sound: Arc<dyn SoundPlayer + Send + Sync> = if cli.no_sound {
        Arc::new(NullSoundPlayer)
    } else {
        Arc::new(ProcessSoundPlayer::new())
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (mut machine, signal_tx) = PomodoroStateMachine::new(sound, cli.sound_file, event_tx);

    let engine = tokio::spawn(async move { machine.run().await });

    let display = Display::new(cli.json);
    display.show_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if let Some(command) = parse_command(&line) {
                            let quitting = command == Command::Shutdown;
                            // A closed channel means the engine is already gone.
                            if signal_tx.send(Signal::Command(command)).is_err() || quitting {
                                break;
                            }
                        }
                    }
                    // stdin closed; follow the shutdown path.
                    None => {
                        let _ = signal_tx.send(Signal::Command(Command::Shutdown));
                        break;
                    }
                }
            }
            event = event_rx.recv() => {
                match event {
                    Some(event) => display.show_event(&event),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                let _ = signal_tx.send(Signal::Command(Command::Shutdown));
                break;
            }
        }
    }

    // The engine tears down sound and timers before returning.
    engine.await??;

    // Flush events that were emitted before shutdown completed.
    while let Ok(event) = event_rx.try_recv() {
        display.show_event(&event);
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["pomodorino"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_completions() {
        let cli = Cli::parse_from(["pomodorino", "completions", "zsh"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["pomodorino", "--verbose"]);
        assert!(cli.verbose);
    }
}
