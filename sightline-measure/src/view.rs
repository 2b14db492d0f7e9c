//! View layout control
//!
//! `ViewController` owns the camera count, the current focus index, and the
//! visible widget subtree; `next`/`save`/`reset` are the only transitions.

/// Which widget subtree is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// All feeds visible, full camera strip.
    Browsing,
    /// Only the focused feed is visible.
    SingleFocus(usize),
    /// Camera view relocated into the measurement report.
    Measuring,
}

/// Window title while browsing feeds.
pub const BROWSE_TITLE: &str = "View camera";
/// Window title on the measurement report.
pub const MEASURE_TITLE: &str = "Measure result";

/// Layout state for the multi-camera viewer.
pub struct ViewController {
    camera_count: usize,
    focus: usize,
    state: ViewState,
}

impl ViewController {
    pub fn new(camera_count: usize) -> Self {
        Self {
            camera_count: camera_count.max(1),
            focus: 0,
            state: ViewState::Browsing,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The feed currently shown full-size.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn camera_count(&self) -> usize {
        self.camera_count
    }

    /// Advance the focused feed circularly. Ignored on the report screen.
    pub fn next(&mut self) {
        if self.state == ViewState::Measuring {
            return;
        }
        self.focus = (self.focus + 1) % self.camera_count;
        self.state = ViewState::SingleFocus(self.focus);
    }

    /// Switch to the measurement report; the first feed takes focus.
    pub fn save(&mut self) {
        if self.state == ViewState::Measuring {
            return;
        }
        self.focus = 0;
        self.state = ViewState::Measuring;
        log::info!("Entering measurement report");
    }

    /// Leave the report and restore the full strip.
    pub fn reset(&mut self) {
        if self.state != ViewState::Measuring {
            return;
        }
        self.state = ViewState::Browsing;
        log::info!("Returning to camera browsing");
    }

    /// Whether feed `idx` is visible in the current state.
    pub fn is_feed_visible(&self, idx: usize) -> bool {
        match self.state {
            ViewState::Browsing => true,
            ViewState::SingleFocus(focus) => idx == focus,
            ViewState::Measuring => idx == self.focus,
        }
    }

    /// Window title for the current state.
    pub fn title(&self) -> &'static str {
        match self.state {
            ViewState::Measuring => MEASURE_TITLE,
            _ => BROWSE_TITLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_browsing_with_first_feed_focused() {
        let controller = ViewController::new(3);
        assert_eq!(controller.state(), ViewState::Browsing);
        assert_eq!(controller.focus(), 0);
        assert_eq!(controller.title(), BROWSE_TITLE);
    }

    #[test]
    fn test_next_enters_single_focus() {
        let mut controller = ViewController::new(3);
        controller.next();
        assert_eq!(controller.state(), ViewState::SingleFocus(1));
        assert_eq!(controller.focus(), 1);
    }

    #[test]
    fn test_next_wraps_after_camera_count_steps() {
        let mut controller = ViewController::new(3);
        let original = controller.focus();
        for _ in 0..3 {
            controller.next();
        }
        assert_eq!(controller.focus(), original);
    }

    #[test]
    fn test_next_with_single_camera_keeps_focus() {
        let mut controller = ViewController::new(1);
        controller.next();
        assert_eq!(controller.focus(), 0);
        assert_eq!(controller.state(), ViewState::SingleFocus(0));
    }

    #[test]
    fn test_save_forces_focus_to_first_feed() {
        let mut controller = ViewController::new(4);
        controller.next();
        controller.next();
        assert_eq!(controller.focus(), 2);

        controller.save();
        assert_eq!(controller.state(), ViewState::Measuring);
        assert_eq!(controller.focus(), 0);
        assert_eq!(controller.title(), MEASURE_TITLE);
    }

    #[test]
    fn test_save_then_reset_restores_browsing_and_title() {
        let mut controller = ViewController::new(3);
        controller.save();
        controller.reset();
        assert_eq!(controller.state(), ViewState::Browsing);
        assert_eq!(controller.title(), "View camera");
    }

    #[test]
    fn test_next_is_ignored_while_measuring() {
        let mut controller = ViewController::new(3);
        controller.save();
        controller.next();
        assert_eq!(controller.state(), ViewState::Measuring);
        assert_eq!(controller.focus(), 0);
    }

    #[test]
    fn test_reset_outside_measuring_is_a_no_op() {
        let mut controller = ViewController::new(3);
        controller.next();
        controller.reset();
        assert_eq!(controller.state(), ViewState::SingleFocus(1));
    }

    #[test]
    fn test_feed_visibility_per_state() {
        let mut controller = ViewController::new(3);
        assert!((0..3).all(|idx| controller.is_feed_visible(idx)));

        controller.next();
        assert!(!controller.is_feed_visible(0));
        assert!(controller.is_feed_visible(1));
        assert!(!controller.is_feed_visible(2));

        controller.save();
        assert!(controller.is_feed_visible(0));
        assert!(!controller.is_feed_visible(1));
    }
}
