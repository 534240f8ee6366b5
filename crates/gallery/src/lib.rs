//! Gallery model for Brutalist Folio
//!
//! This crate turns the declarative attributes on each project card into a
//! typed [`MediaItem`] once, at load time, and renders the lightbox markup
//! for an item.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod markup;
pub mod media;

pub use markup::Markup;
pub use media::{Card, CardAttributes, CardId, Gallery, MediaError, MediaItem};
