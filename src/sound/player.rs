//! Alert sound playback via an external player process.
//!
//! The alert sound is played by spawning a system audio player (`paplay`
//! when PulseAudio is present, `aplay` otherwise) on a single fixed sound
//! file. Playback is strictly best-effort: a missing file is a silent no-op
//! and a failed launch never reaches the state machine as anything more
//! than a log line.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use tracing::{debug, warn};

use super::error::SoundError;

/// PulseAudio player binary, preferred when installed.
const PULSE_PLAYER: &str = "/usr/bin/paplay";

/// ALSA player binary, used as the fallback.
const ALSA_PLAYER: &str = "aplay";

/// A sound player that tracks one external playback process at a time.
///
/// All methods take `&self`; the process handle lives behind a mutex so the
/// player can be shared across tasks with `Arc`. At most one child process
/// is tracked: a successful `play` while a previous handle is held simply
/// overwrites the tracking, so callers are expected to `stop` first.
pub struct ProcessSoundPlayer {
    /// The player binary to invoke.
    program: PathBuf,
    /// Handle of the currently playing process, if any.
    child: Mutex<Option<Child>>,
}

impl ProcessSoundPlayer {
    /// Creates a player using the best available system audio player.
    pub fn new() -> Self {
        Self::with_program(detect_player())
    }

    /// Creates a player that invokes the given program.
    ///
    /// Used by tests to substitute a harmless binary for the real player.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            child: Mutex::new(None),
        }
    }

    /// Starts playback of the given sound file.
    ///
    /// Returns immediately; the child process plays in the background and
    /// its output and exit code are discarded. If the file does not exist
    /// this is a silent no-op and no handle is tracked.
    ///
    /// # Errors
    ///
    /// Returns [`SoundError::SpawnFailed`] if the player binary could not
    /// be launched. Callers are expected to swallow this.
    pub fn play(&self, path: &Path) -> Result<(), SoundError> {
        if !path.exists() {
            debug!("Sound file {} not found, skipping playback", path.display());
            return Ok(());
        }

        let child = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SoundError::SpawnFailed {
                program: self.program.display().to_string(),
                source,
            })?;

        debug!("Playback started (pid {})", child.id());
        if let Ok(mut slot) = self.child.lock() {
            *slot = Some(child);
        }
        Ok(())
    }

    /// Terminates the tracked playback process, if any.
    ///
    /// Idempotent; termination failures are logged and otherwise ignored.
    pub fn stop(&self) {
        let taken = match self.child.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };

        if let Some(mut child) = taken {
            if let Err(e) = child.kill() {
                warn!("Failed to terminate audio player: {}", e);
            }
            // Reap the child so it does not linger as a zombie.
            let _ = child.wait();
            debug!("Playback stopped");
        }
    }

    /// Returns true if a playback process is currently tracked.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.child.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Default for ProcessSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProcessSoundPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for ProcessSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessSoundPlayer")
            .field("program", &self.program)
            .field("playing", &self.is_playing())
            .finish()
    }
}

/// Picks the system audio player: `paplay` if PulseAudio is installed,
/// `aplay` otherwise.
fn detect_player() -> PathBuf {
    if Path::new(PULSE_PLAYER).exists() {
        PathBuf::from(PULSE_PLAYER)
    } else {
        PathBuf::from(ALSA_PLAYER)
    }
}
