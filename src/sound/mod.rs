//! Sound playback for the alert phase.
//!
//! This module provides best-effort audio notification:
//!
//! - External playback process lifecycle (spawn on alert, kill on exit)
//! - Graceful degradation when the file or player binary is missing
//! - A trait seam so the engine can be tested without audio
//!
//! The state machine never learns about playback failures beyond a log
//! line; a silent alert is still an alert.

mod error;
mod player;

use std::path::Path;
use std::sync::Arc;

pub use error::SoundError;
pub use player::ProcessSoundPlayer;

/// Trait for sound playback implementations.
///
/// Methods take `&self` so implementations can be shared behind `Arc`;
/// process-handle state lives behind interior mutability.
pub trait SoundPlayer {
    /// Starts best-effort playback of the given sound file.
    ///
    /// Must be non-blocking and must treat a missing file as a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the playback process could not be launched.
    fn play(&self, path: &Path) -> Result<(), SoundError>;

    /// Stops playback and releases the process handle. Idempotent.
    fn stop(&self);

    /// Returns true if a playback process is currently tracked.
    fn is_playing(&self) -> bool;
}

impl SoundPlayer for ProcessSoundPlayer {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        ProcessSoundPlayer::play(self, path)
    }

    fn stop(&self) {
        ProcessSoundPlayer::stop(self)
    }

    fn is_playing(&self) -> bool {
        ProcessSoundPlayer::is_playing(self)
    }
}

impl<S: SoundPlayer + ?Sized> SoundPlayer for Arc<S> {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        (**self).play(path)
    }

    fn stop(&self) {
        (**self).stop()
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }
}

/// Sound player that never plays anything, for `--no-sound` mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play(&self, _path: &Path) -> Result<(), SoundError> {
        Ok(())
    }

    fn stop(&self) {}

    fn is_playing(&self) -> bool {
        false
    }
}

/// Mock sound player for testing.
///
/// Records every `play` and `stop` call and mimics the handle tracking of
/// the real player.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<std::path::PathBuf>>,
    stop_calls: std::sync::atomic::AtomicUsize,
    playing: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `play` calls fail with a spawn error.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<std::path::PathBuf> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::SpawnFailed {
                program: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock failure"),
            });
        }
        self.play_calls.lock().unwrap().push(path.to_path_buf());
        self.playing
            .store(true, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.stop_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.playing
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(std::sync::atomic::Ordering::SeqCst)
    }
}
