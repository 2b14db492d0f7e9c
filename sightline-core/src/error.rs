//! Capture error types
//!
//! None of these are fatal to the process: an unavailable device degrades to
//! a placeholder in the UI, a failed read is skipped until the next tick.

use thiserror::Error;

/// Errors raised by the capture layer.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The capture worker thread could not be spawned.
    #[error("failed to spawn capture thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),

    /// The camera device could not be opened by the backend.
    #[error("camera {index} unavailable")]
    DeviceUnavailable {
        index: u32,
        #[source]
        source: nokhwa::NokhwaError,
    },
}
