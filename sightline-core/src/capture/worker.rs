//! nokhwa-backed capture worker
//!
//! Each open device runs one capture thread that decodes frames and publishes
//! the latest one into a single-slot mailbox; the UI tick reads the mailbox
//! without ever blocking on the device. A device that fails to open leaves
//! the mailbox empty forever, which the UI renders as a placeholder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType, Resolution};
use nokhwa::Camera;
use parking_lot::Mutex;

use crate::capture::source::CaptureSource;
use crate::error::CaptureError;
use crate::frame::Frame;

/// Single-slot mailbox holding the most recent frame.
type Mailbox = Arc<Mutex<Option<Frame>>>;

/// A running per-device capture thread.
pub struct CaptureWorker {
    mailbox: Mailbox,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl CaptureWorker {
    /// Spawn the capture thread for device `index`.
    ///
    /// The device itself is opened inside the thread; a device that cannot be
    /// opened is not an error here, it just never publishes a frame.
    pub fn spawn(index: u32) -> Result<Self, CaptureError> {
        let mailbox: Mailbox = Arc::new(Mutex::new(None));
        let running = Arc::new(AtomicBool::new(true));

        let thread_mailbox = mailbox.clone();
        let thread_running = running.clone();
        let thread = std::thread::Builder::new()
            .name(format!("capture-{}", index))
            .spawn(move || Self::run(index, thread_mailbox, thread_running))?;

        Ok(Self {
            mailbox,
            running,
            thread: Some(thread),
        })
    }

    /// Capture loop: open the device, then publish decoded frames until the
    /// running flag clears.
    fn run(index: u32, mailbox: Mailbox, running: Arc<AtomicBool>) {
        log::info!("Starting capture thread (camera {})", index);

        let mut camera = match open_camera(index) {
            Ok(camera) => camera,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        if let Err(e) = camera.open_stream() {
            log::error!("Failed to open camera {} stream: {:?}", index, e);
            return;
        }

        log::info!(
            "Camera opened: {} ({}x{})",
            camera.info().human_name(),
            camera.resolution().width(),
            camera.resolution().height()
        );

        while running.load(Ordering::Acquire) {
            match camera.frame() {
                Ok(buffer) => match buffer.decode_image::<RgbFormat>() {
                    Ok(decoded) => {
                        let (width, height) = (decoded.width(), decoded.height());
                        let frame = Frame::new(width, height, decoded.into_raw());
                        *mailbox.lock() = Some(frame);
                    }
                    Err(e) => {
                        log::warn!("Failed to decode frame: {:?}", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to capture frame: {:?}", e);
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        }

        log::info!("Capture thread stopped (camera {})", index);
    }

    /// Latest frame published by the worker, if any has arrived yet.
    pub fn latest_frame(&self) -> Option<Frame> {
        self.mailbox.lock().clone()
    }

    /// Stop the worker and join its thread. Safe to call more than once.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for CaptureWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Open a device with the resolution fallback chain: highest available, then
/// 640x480-capped, then whatever the backend picks.
fn open_camera(index: u32) -> Result<Camera, CaptureError> {
    let camera_index = CameraIndex::Index(index);

    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    match Camera::new(camera_index.clone(), requested) {
        Ok(camera) => return Ok(camera),
        Err(e) => {
            log::warn!("Camera {} rejected highest resolution: {:?}", index, e);
        }
    }

    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::HighestResolution(
        Resolution::new(640, 480),
    ));
    match Camera::new(camera_index.clone(), requested) {
        Ok(camera) => return Ok(camera),
        Err(e) => {
            log::warn!("Camera {} rejected 640x480: {:?}", index, e);
        }
    }

    let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::None);
    Camera::new(camera_index, requested)
        .map_err(|source| CaptureError::DeviceUnavailable { index, source })
}

/// Live capture backend: one `CaptureWorker` per open device.
#[derive(Debug, Default)]
pub struct NokhwaSource;

impl NokhwaSource {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureSource for NokhwaSource {
    type Handle = CaptureWorker;

    fn open(&mut self, index: u32) -> Option<CaptureWorker> {
        match CaptureWorker::spawn(index) {
            Ok(worker) => Some(worker),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        }
    }

    fn read(&mut self, handle: &mut CaptureWorker) -> Option<Frame> {
        handle.latest_frame()
    }

    fn release(&mut self, mut handle: CaptureWorker) {
        handle.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No camera hardware is assumed here: a worker whose device cannot open
    // must still start, stay empty, and stop cleanly.

    #[test]
    fn test_stop_is_idempotent() {
        let mut worker = CaptureWorker::spawn(200).expect("spawn");
        worker.stop();
        worker.stop();
        assert_eq!(worker.latest_frame(), None);
    }

    #[test]
    fn test_drop_after_stop_is_safe() {
        let mut worker = CaptureWorker::spawn(201).expect("spawn");
        worker.stop();
        drop(worker);
    }
}
