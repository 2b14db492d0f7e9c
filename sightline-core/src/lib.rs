//! Sightline core - camera capture and overlay rendering
//!
//! Shared library behind the Sightline viewer applications. Provides the
//! frame model, the guide-line/crosshair overlay renderer with its
//! configuration state, and camera capture: a backend-agnostic
//! `CaptureSource` trait, the selection state machine built on top of it,
//! and the nokhwa-backed capture worker used at runtime.

pub mod capture;
pub mod error;
pub mod frame;
pub mod overlay;

pub use capture::{CameraInfo, CameraSelector, CaptureSource, CaptureWorker, NokhwaSource};
pub use error::CaptureError;
pub use frame::Frame;
pub use overlay::{OverlayConfig, OverlayInputs};
