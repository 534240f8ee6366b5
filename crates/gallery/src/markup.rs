//! Lightbox markup
//!
//! Renders the content placed inside the lightbox: an `<img>` for image
//! cards, an `<iframe>` on an allow-listed embed host for video cards.

use crate::media::MediaItem;
use video_embed::{EmbedUrl, VideoEmbedResolver};

/// Permission policy of embedded players
pub const IFRAME_ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

/// Referrer policy of embedded players
pub const IFRAME_REFERRER_POLICY: &str = "strict-origin-when-cross-origin";

/// Alt text used when a card declares none
pub const DEFAULT_ALT: &str = "Project";

/// Lightbox content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Enlarged image
    Image {
        /// Image source
        src: String,
        /// Alt text
        alt: String,
    },
    /// Embedded video player
    Iframe {
        /// Resolved player URL
        src: EmbedUrl,
    },
}

impl Markup {
    /// Build the markup for a media item
    ///
    /// Returns `None` when a video cannot be resolved; the failure is logged.
    pub fn for_item(item: &MediaItem, resolver: &VideoEmbedResolver) -> Option<Self> {
        match item {
            MediaItem::Image { src, alt } => Some(Markup::Image {
                src: src.clone(),
                alt: alt.clone().unwrap_or_else(|| DEFAULT_ALT.to_string()),
            }),
            MediaItem::Video { reference } => {
                resolver.resolve_or_log(reference).map(|src| Markup::Iframe { src })
            }
        }
    }

    /// Whether this markup plays media
    pub fn is_playable(&self) -> bool {
        matches!(self, Markup::Iframe { .. })
    }

    /// Render as an HTML fragment
    pub fn to_html(&self) -> String {
        match self {
            Markup::Image { src, alt } => {
                format!(r#"<img src="{}" alt="{}">"#, escape_attribute(src), escape_attribute(alt))
            }
            Markup::Iframe { src } => format!(
                concat!(
                    r#"<iframe src="{}" frameborder="0" "#,
                    r#"allow="{}" allowfullscreen "#,
                    r#"referrerpolicy="{}"></iframe>"#
                ),
                escape_attribute(src.as_str()),
                IFRAME_ALLOW,
                IFRAME_REFERRER_POLICY
            ),
        }
    }
}

/// Escape a value for use inside a double-quoted HTML attribute
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
