//! Sound system error types.

use thiserror::Error;

/// Errors that can occur while driving the external playback process.
///
/// None of these are fatal: the state machine swallows them so that the
/// alert cycle proceeds with or without audio.
#[derive(Debug, Error)]
pub enum SoundError {
    /// The external player process could not be launched.
    #[error("failed to launch audio player '{program}': {source}")]
    SpawnFailed {
        /// The player binary that was invoked
        program: String,
        /// The underlying OS error
        #[source]
        source: std::io::Error,
    },
}
