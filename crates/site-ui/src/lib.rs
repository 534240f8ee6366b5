//! Interaction layer for Brutalist Folio
//!
//! Each page behavior is a self-contained component that reacts to
//! [`events::Event`]s. Components are attached to a
//! [`events::ListenerRegistry`] when mounted and detached on teardown.
//!
//! # Modules
//!
//! - [`events`] - Event model, listener registry and the [`Component`] trait
//! - [`lightbox`] - Modal showing an enlarged image or an embedded video
//! - [`cursor`] - Custom cursor following the mouse with linear interpolation
//! - [`grid_hover`] - Dims every other card while one is hovered
//! - [`reveal`] - Reveals cards as they enter the viewport
//! - [`scroll`] - Scroll offset tracking coalesced to one update per frame
//! - [`particles`] - Decorative background particles
//! - [`preloader`] - Loading overlay hidden shortly after page load
//! - [`tokens`] - Timing and tuning constants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod events;
pub mod grid_hover;
pub mod lightbox;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod scroll;
pub mod tokens;

pub use cursor::CursorFollower;
pub use events::{
    ClickTarget, Component, Event, EventKind, HoverTarget, IntersectionEntry, Key,
    ListenerRegistry, Point, Rect,
};
pub use grid_hover::GridHover;
pub use lightbox::{Lightbox, LightboxPhase};
pub use particles::{Particle, ParticleField};
pub use preloader::Preloader;
pub use reveal::{RevealOptions, ScrollReveal};
pub use scroll::ScrollTracker;
