//! Capture source abstraction and camera selection
//!
//! `CaptureSource` is the minimal interface a camera backend must provide;
//! `CameraSelector` owns the handle lifecycle for one viewer: switching
//! devices always releases the previous handle before opening the next one,
//! and teardown releases exactly once.

use crate::frame::Frame;

/// Minimal interface to a camera backend.
///
/// All three operations are failure-tolerant: an unavailable device or a
/// missing frame is an expected condition, not an error.
pub trait CaptureSource {
    /// An open device, owned by the caller until passed back to `release`.
    type Handle;

    /// Open device `index`. `None` when the device cannot be opened.
    fn open(&mut self, index: u32) -> Option<Self::Handle>;

    /// The latest frame from the device, if one is available this tick.
    fn read(&mut self, handle: &mut Self::Handle) -> Option<Frame>;

    /// Release the device.
    fn release(&mut self, handle: Self::Handle);
}

enum Slot<H> {
    Empty,
    Open { index: u32, handle: Option<H> },
}

/// Tracks which device a viewer has open.
///
/// A selection survives an open failure: the index stays recorded and every
/// poll simply comes back empty, so the viewer renders its placeholder until
/// the user picks a different device.
pub struct CameraSelector<S: CaptureSource> {
    source: S,
    slot: Slot<S::Handle>,
}

impl<S: CaptureSource> CameraSelector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slot: Slot::Empty,
        }
    }

    /// Switch to device `new_index`, releasing the current device first.
    pub fn select(&mut self, new_index: u32) {
        self.deselect();
        log::info!("Selecting camera {}", new_index);
        let handle = self.source.open(new_index);
        if handle.is_none() {
            log::warn!("Camera {} unavailable", new_index);
        }
        self.slot = Slot::Open {
            index: new_index,
            handle,
        };
    }

    /// Release the current device, if any. Idempotent.
    pub fn deselect(&mut self) {
        if let Slot::Open { index, handle } = std::mem::replace(&mut self.slot, Slot::Empty) {
            if let Some(handle) = handle {
                self.source.release(handle);
            }
            log::info!("Camera {} deselected", index);
        }
    }

    /// Index of the selected device, open or not.
    pub fn selected(&self) -> Option<u32> {
        match self.slot {
            Slot::Open { index, .. } => Some(index),
            Slot::Empty => None,
        }
    }

    /// Latest frame from the selected device. `None` suppresses the frame
    /// update for this tick without changing the selection.
    pub fn poll(&mut self) -> Option<Frame> {
        match &mut self.slot {
            Slot::Open {
                handle: Some(handle),
                ..
            } => self.source.read(handle),
            _ => None,
        }
    }

    /// Text shown when no frame is available: the camera's 1-based number,
    /// or "Camera 0" when nothing is selected.
    pub fn placeholder_label(&self) -> String {
        let number = match self.slot {
            Slot::Open { index, .. } => index + 1,
            Slot::Empty => 0,
        };
        format!("Camera {}", number)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CaptureSource> Drop for CameraSelector<S> {
    fn drop(&mut self) {
        self.deselect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Open(u32),
        Read(u32),
        Release(u32),
    }

    /// Records every backend call; devices listed in `unavailable` refuse to
    /// open.
    #[derive(Clone, Default)]
    struct SpySource {
        log: Rc<RefCell<Vec<Event>>>,
        unavailable: Vec<u32>,
        frame: Option<Frame>,
    }

    impl CaptureSource for SpySource {
        type Handle = u32;

        fn open(&mut self, index: u32) -> Option<u32> {
            self.log.borrow_mut().push(Event::Open(index));
            if self.unavailable.contains(&index) {
                None
            } else {
                Some(index)
            }
        }

        fn read(&mut self, handle: &mut u32) -> Option<Frame> {
            self.log.borrow_mut().push(Event::Read(*handle));
            self.frame.clone()
        }

        fn release(&mut self, handle: u32) {
            self.log.borrow_mut().push(Event::Release(handle));
        }
    }

    #[test]
    fn test_select_releases_previous_before_opening() {
        let source = SpySource::default();
        let log = source.log.clone();
        let mut selector = CameraSelector::new(source);

        selector.select(1);
        selector.select(2);

        assert_eq!(
            *log.borrow(),
            vec![Event::Open(1), Event::Release(1), Event::Open(2)]
        );
        assert_eq!(selector.selected(), Some(2));
    }

    #[test]
    fn test_deselect_is_idempotent() {
        let source = SpySource::default();
        let log = source.log.clone();
        let mut selector = CameraSelector::new(source);

        selector.select(1);
        selector.deselect();
        selector.deselect();

        let releases = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Release(_)))
            .count();
        assert_eq!(releases, 1);
        assert_eq!(selector.selected(), None);
    }

    #[test]
    fn test_unavailable_device_is_still_selected() {
        let source = SpySource {
            unavailable: vec![3],
            ..SpySource::default()
        };
        let log = source.log.clone();
        let mut selector = CameraSelector::new(source);

        selector.select(3);

        assert_eq!(selector.selected(), Some(3));
        assert_eq!(selector.poll(), None);
        assert_eq!(selector.placeholder_label(), "Camera 4");
        // nothing to release on deselect
        selector.deselect();
        assert_eq!(*log.borrow(), vec![Event::Open(3)]);
    }

    #[test]
    fn test_poll_reads_from_the_open_handle() {
        let source = SpySource {
            frame: Some(Frame::filled(2, 2, [1, 2, 3])),
            ..SpySource::default()
        };
        let log = source.log.clone();
        let mut selector = CameraSelector::new(source);

        assert_eq!(selector.poll(), None);
        selector.select(0);
        assert_eq!(selector.poll(), Some(Frame::filled(2, 2, [1, 2, 3])));
        assert!(log.borrow().contains(&Event::Read(0)));
    }

    #[test]
    fn test_placeholder_label_is_one_based() {
        let mut selector = CameraSelector::new(SpySource::default());
        assert_eq!(selector.placeholder_label(), "Camera 0");
        selector.select(0);
        assert_eq!(selector.placeholder_label(), "Camera 1");
    }

    #[test]
    fn test_drop_releases_the_open_handle() {
        let source = SpySource::default();
        let log = source.log.clone();
        {
            let mut selector = CameraSelector::new(source);
            selector.select(5);
        }
        assert_eq!(*log.borrow(), vec![Event::Open(5), Event::Release(5)]);
    }
}
