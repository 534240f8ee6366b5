//! Scroll tracking
//!
//! Scroll events can fire many times per frame. The tracker only records the
//! latest offset and requests a single frame; the offset is applied when that
//! frame runs.

use crate::events::{Component, Event, EventKind};
use crate::tokens::{class_names, scroll};

/// Frame-coalesced scroll offset
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    /// Frame requested and not yet run
    ticking: bool,
    pending: f64,
    offset: f64,
    scrolled_threshold: f64,
    frames_applied: u64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(scroll::SCROLLED_THRESHOLD)
    }
}

impl ScrollTracker {
    /// Create a tracker at the top of the page
    pub fn new(scrolled_threshold: f64) -> Self {
        Self {
            ticking: false,
            pending: 0.0,
            offset: 0.0,
            scrolled_threshold,
            frames_applied: 0,
        }
    }

    /// Record a scroll event; returns `true` when a new frame must be requested
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.pending = offset;
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Run the requested frame, if any
    pub fn on_frame(&mut self) {
        if !self.ticking {
            return;
        }
        self.offset = self.pending;
        self.ticking = false;
        self.frames_applied += 1;
    }

    /// Applied scroll offset
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Check if a frame is pending
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Number of frames that applied an offset
    pub fn frames_applied(&self) -> u64 {
        self.frames_applied
    }

    /// Whether the page is scrolled past the threshold
    pub fn is_scrolled(&self) -> bool {
        self.offset > self.scrolled_threshold
    }

    /// Class toggled on the page header
    pub fn class(&self) -> Option<&'static str> {
        self.is_scrolled().then_some(class_names::SCROLLED)
    }
}

impl Component for ScrollTracker {
    fn name(&self) -> &'static str {
        "scroll"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[EventKind::Scroll, EventKind::AnimationFrame]
    }

    fn handle(&mut self, event: &Event) {
        match event {
            Event::Scroll { offset } => {
                self.on_scroll(*offset);
            }
            Event::AnimationFrame => self.on_frame(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_coalesce_into_one_frame() {
        let mut tracker = ScrollTracker::default();
        assert!(tracker.on_scroll(10.0));
        assert!(!tracker.on_scroll(20.0));
        assert!(!tracker.on_scroll(80.0));
        assert_eq!(tracker.offset(), 0.0);

        tracker.on_frame();
        assert_eq!(tracker.offset(), 80.0);
        assert_eq!(tracker.frames_applied(), 1);
        assert!(!tracker.is_ticking());
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn test_idle_frames_do_nothing() {
        let mut tracker = ScrollTracker::default();
        tracker.on_frame();
        tracker.on_frame();
        assert_eq!(tracker.frames_applied(), 0);
    }

    #[test]
    fn test_scrolled_class() {
        let mut tracker = ScrollTracker::default();
        tracker.handle(&Event::Scroll { offset: 50.0 });
        tracker.handle(&Event::AnimationFrame);
        assert!(tracker.class().is_none());

        tracker.handle(&Event::Scroll { offset: 51.0 });
        tracker.handle(&Event::AnimationFrame);
        assert_eq!(tracker.class(), Some("scrolled"));
    }
}
