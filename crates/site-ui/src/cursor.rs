//! Custom cursor follower
//!
//! The cursor element trails the pointer: every animation frame it covers a
//! fixed fraction of the remaining distance (linear interpolation).

use crate::events::{Component, Event, EventKind, Point};
use crate::tokens::{class_names, cursor};

/// Cursor element state
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFollower {
    position: Point,
    target: Point,
    speed: f64,
    hover_active: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(cursor::LERP_SPEED)
    }
}

impl CursorFollower {
    /// Create a follower at the origin; `speed` is clamped to `0.0..=1.0`
    pub fn new(speed: f64) -> Self {
        Self {
            position: Point::default(),
            target: Point::default(),
            speed: speed.clamp(0.0, 1.0),
            hover_active: false,
        }
    }

    /// Record the pointer position
    pub fn move_to(&mut self, pointer: Point) {
        self.target = pointer;
    }

    /// Advance one frame
    pub fn step(&mut self) {
        self.position.x += (self.target.x - self.position.x) * self.speed;
        self.position.y += (self.target.y - self.position.y) * self.speed;
    }

    /// Rendered position
    pub fn position(&self) -> Point {
        self.position
    }

    /// Last pointer position
    pub fn target(&self) -> Point {
        self.target
    }

    /// Interpolation factor
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the pointer is over an interactive element
    pub fn is_hover_active(&self) -> bool {
        self.hover_active
    }

    /// Inline style for the cursor element
    pub fn style(&self) -> String {
        format!("left: {:.2}px; top: {:.2}px;", self.position.x, self.position.y)
    }

    /// Class toggled on the cursor element
    pub fn class(&self) -> Option<&'static str> {
        self.hover_active.then_some(class_names::HOVER_ACTIVE)
    }
}

impl Component for CursorFollower {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[
            EventKind::MouseMove,
            EventKind::MouseEnter,
            EventKind::MouseLeave,
            EventKind::AnimationFrame,
        ]
    }

    fn handle(&mut self, event: &Event) {
        match event {
            Event::MouseMove(pointer) => self.move_to(*pointer),
            Event::MouseEnter(_) => self.hover_active = true,
            Event::MouseLeave(_) => self.hover_active = false,
            Event::AnimationFrame => self.step(),
            _ => {}
        }
    }
}
