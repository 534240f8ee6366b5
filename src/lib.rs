//! Brutalist Folio
//!
//! Interaction layer of a static portfolio page: video embed resolution,
//! the lightbox, and the decorative components around the project grid.
//! [`Site`] mounts every component from a [`PageDocument`] and routes page
//! events to them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod logging;
pub mod site;

pub use config::SiteConfig;
pub use document::PageDocument;
pub use logging::init_logging;
pub use site::Site;

pub use gallery::{CardAttributes, CardId, Gallery, Markup, MediaItem};
pub use site_ui::{ClickTarget, Event, HoverTarget, Key, LightboxPhase, Point, Rect};
pub use video_embed::{EmbedConfig, EmbedError, EmbedUrl, OriginPolicy, VideoEmbedResolver, VideoReference};

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Error types for site setup
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// An element a component needs is absent from the page
    #[error("Missing DOM element: #{0}")]
    MissingDomElement(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Embed configuration error
    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
