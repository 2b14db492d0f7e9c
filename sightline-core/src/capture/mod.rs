//! Camera capture
//!
//! A backend-agnostic `CaptureSource` trait with the selection state machine
//! built on top of it, plus the nokhwa-backed worker used at runtime and
//! device enumeration.

pub mod source;
pub mod worker;

use serde::{Deserialize, Serialize};

pub use source::{CameraSelector, CaptureSource};
pub use worker::{CaptureWorker, NokhwaSource};

/// Information about an available camera.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraInfo {
    /// Camera index
    pub index: u32,
    /// Camera name
    pub name: String,
}

/// List available cameras.
///
/// Enumeration failure is not fatal; it logs a warning and returns an empty
/// list, and callers fall back to assuming a single device at index 0.
pub fn list_cameras() -> Vec<CameraInfo> {
    let mut cameras = Vec::new();

    match nokhwa::query(nokhwa::utils::ApiBackend::Auto) {
        Ok(camera_list) => {
            for (idx, info) in camera_list.iter().enumerate() {
                cameras.push(CameraInfo {
                    index: idx as u32,
                    name: info.human_name().to_string(),
                });
            }
        }
        Err(e) => {
            log::warn!("Failed to enumerate cameras: {:?}", e);
        }
    }

    cameras
}
