//! Page events and component lifecycle
//!
//! Browser callbacks are modelled as [`Event`] values. A component declares
//! the [`EventKind`]s it listens to; the [`ListenerRegistry`] records those
//! subscriptions on mount and drops them on teardown, so a page can be
//! re-initialized cleanly.

use gallery::CardId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point {
    /// Create a point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap with another rectangle, if the two touch
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < x || bottom < y {
            return None;
        }
        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

/// Element under the pointer for hover events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// Project card
    Card(CardId),
    /// Anchor element
    Link,
    /// Button element
    Button,
}

/// Element receiving a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// Project card
    Card(CardId),
    /// Lightbox overlay outside its content
    LightboxBackdrop,
    /// Lightbox content
    LightboxContent,
    /// Lightbox close button
    LightboxClose,
    /// Anything else
    Elsewhere,
}

/// Keyboard key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape
    Escape,
    /// Any other key, by name
    Other(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Intersection observer record for one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Observed card
    pub target: CardId,
    /// Whether the card crossed the observer threshold
    pub is_intersecting: bool,
    /// Visible fraction of the card
    pub ratio: f64,
}

/// Page event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer moved
    MouseMove(Point),
    /// Pointer entered an element
    MouseEnter(HoverTarget),
    /// Pointer left an element
    MouseLeave(HoverTarget),
    /// Click
    Click(ClickTarget),
    /// Key pressed
    KeyDown(Key),
    /// Intersection observer callback
    Intersection(Vec<IntersectionEntry>),
    /// Page scrolled to a vertical offset
    Scroll {
        /// Vertical scroll offset
        offset: f64,
    },
    /// Animation frame callback
    AnimationFrame,
    /// Window finished loading
    Load,
}

/// Discriminant of an [`Event`], used for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`Event::MouseMove`]
    MouseMove,
    /// [`Event::MouseEnter`]
    MouseEnter,
    /// [`Event::MouseLeave`]
    MouseLeave,
    /// [`Event::Click`]
    Click,
    /// [`Event::KeyDown`]
    KeyDown,
    /// [`Event::Intersection`]
    Intersection,
    /// [`Event::Scroll`]
    Scroll,
    /// [`Event::AnimationFrame`]
    AnimationFrame,
    /// [`Event::Load`]
    Load,
}

impl Event {
    /// Get the event kind
    pub fn kind(&self) -> EventKind {
        match self {
            Event::MouseMove(_) => EventKind::MouseMove,
            Event::MouseEnter(_) => EventKind::MouseEnter,
            Event::MouseLeave(_) => EventKind::MouseLeave,
            Event::Click(_) => EventKind::Click,
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::Intersection(_) => EventKind::Intersection,
            Event::Scroll { .. } => EventKind::Scroll,
            Event::AnimationFrame => EventKind::AnimationFrame,
            Event::Load => EventKind::Load,
        }
    }
}

/// Page behavior driven by events
pub trait Component: Send {
    /// Unique component name
    fn name(&self) -> &'static str;

    /// Event kinds this component listens to
    fn subscriptions(&self) -> &'static [EventKind];

    /// React to an event
    fn handle(&mut self, event: &Event);

    /// Release state before the component is dropped
    fn teardown(&mut self) {}
}

/// Which components listen to which events
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: HashMap<EventKind, Vec<&'static str>>,
}

impl ListenerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a component's subscriptions
    pub fn attach(&mut self, component: &dyn Component) {
        let name = component.name();
        for kind in component.subscriptions() {
            let names = self.listeners.entry(*kind).or_default();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        tracing::debug!(component = name, "Attached listeners");
    }

    /// Detach every subscription of a component, returning how many were removed
    pub fn detach(&mut self, name: &str) -> usize {
        let mut removed = 0;
        for names in self.listeners.values_mut() {
            let before = names.len();
            names.retain(|n| *n != name);
            removed += before - names.len();
        }
        self.listeners.retain(|_, names| !names.is_empty());
        removed
    }

    /// Components listening to an event kind, in attach order
    pub fn listeners(&self, kind: EventKind) -> &[&'static str] {
        self.listeners.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Check if a component has any subscription
    pub fn is_attached(&self, name: &str) -> bool {
        self.listeners.values().any(|names| names.iter().any(|n| *n == name))
    }

    /// Total number of subscriptions
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Check if nothing is attached
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Component for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn subscriptions(&self) -> &'static [EventKind] {
            &[EventKind::Click, EventKind::KeyDown]
        }

        fn handle(&mut self, _event: &Event) {}
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(Event::Load.kind(), EventKind::Load);
        assert_eq!(Event::Scroll { offset: 3.0 }.kind(), EventKind::Scroll);
        assert_eq!(Event::Click(ClickTarget::Elsewhere).kind(), EventKind::Click);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Other("Enter".to_string()));
    }

    #[test]
    fn test_registry_attach_detach() {
        let mut registry = ListenerRegistry::new();
        let probe = Probe;

        registry.attach(&probe);
        registry.attach(&probe);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.listeners(EventKind::Click), &["probe"]);
        assert!(registry.listeners(EventKind::Load).is_empty());
        assert!(registry.is_attached("probe"));

        assert_eq!(registry.detach("probe"), 2);
        assert!(registry.is_empty());
        assert!(!registry.is_attached("probe"));
        assert_eq!(registry.detach("probe"), 0);
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 80.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 80.0, 50.0, 20.0)));

        let c = Rect::new(0.0, 200.0, 10.0, 10.0);
        assert_eq!(a.intersection(&c), None);
    }
}
