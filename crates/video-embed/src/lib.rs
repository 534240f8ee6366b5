//! Video embed resolution for Brutalist Folio
//!
//! This crate turns the video references found on gallery cards (a raw
//! YouTube/Vimeo URL, or a platform + ID pair) into iframe sources on an
//! allow-listed embed host.
//!
//! # Example
//!
//! ```rust
//! use video_embed::{VideoEmbedResolver, VideoReference};
//!
//! let resolver = VideoEmbedResolver::default();
//! let embed = resolver
//!     .resolve(&VideoReference::url("https://youtu.be/dQw4w9WgXcQ"))
//!     .unwrap();
//! assert_eq!(
//!     embed.as_str(),
//!     "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?autoplay=1&controls=1&modestbranding=1"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod reference;
pub mod resolver;

pub use reference::{Platform, VideoReference};
pub use resolver::{EmbedConfig, EmbedError, EmbedUrl, OriginPolicy, Result, VideoEmbedResolver};
