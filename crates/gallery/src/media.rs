//! Gallery cards and their media
//!
//! Card attributes arrive as loosely-typed strings (`data-type`, `data-src`,
//! `data-video-url`, ...). They are parsed once into [`MediaItem`] so the
//! lightbox never branches on attribute strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use video_embed::{Platform, VideoReference};

/// Errors raised while reading card attributes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// `type` is neither `image` nor `video`
    #[error("Unknown card type: {0}")]
    UnknownType(String),

    /// A required attribute is absent or empty
    #[error("Missing attribute `{attribute}` on {kind} card")]
    MissingAttribute {
        /// Card kind being parsed
        kind: &'static str,
        /// Attribute name
        attribute: &'static str,
    },
}

/// Result type for media operations
pub type Result<T> = std::result::Result<T, MediaError>;

/// Raw attributes of a project card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CardAttributes {
    /// `image` or `video`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Image source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Image alt text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Raw video URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Declared video platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Video ID (used together with `platform`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl CardAttributes {
    /// Attributes for an image card
    pub fn image(src: impl Into<String>) -> Self {
        Self { kind: Some("image".to_string()), src: Some(src.into()), ..Default::default() }
    }

    /// Attributes for a video card carrying a raw URL
    pub fn video_url(url: impl Into<String>) -> Self {
        Self { kind: Some("video".to_string()), video_url: Some(url.into()), ..Default::default() }
    }

    /// Attributes for a video card carrying a platform and ID
    pub fn video_id(platform: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            kind: Some("video".to_string()),
            platform: Some(platform.into()),
            video_id: Some(video_id.into()),
            ..Default::default()
        }
    }

    /// Build from element attribute pairs; `data-` prefixes are stripped and
    /// unrelated attributes ignored
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut attributes = Self::default();
        for (name, value) in pairs {
            let name = name.strip_prefix("data-").unwrap_or(name);
            let slot = match name {
                "type" => &mut attributes.kind,
                "src" => &mut attributes.src,
                "alt" => &mut attributes.alt,
                "video-url" | "url" => &mut attributes.video_url,
                "platform" => &mut attributes.platform,
                "video-id" => &mut attributes.video_id,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }
        attributes
    }
}

/// Non-empty, trimmed attribute value
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Media shown in the lightbox for a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    /// Enlarged image
    Image {
        /// Image source
        src: String,
        /// Alt text
        alt: Option<String>,
    },
    /// Embedded video
    Video {
        /// Video reference to resolve on open
        reference: VideoReference,
    },
}

impl MediaItem {
    /// Parse card attributes into a media item
    pub fn from_attributes(attributes: &CardAttributes) -> Result<Self> {
        let kind = present(&attributes.kind)
            .ok_or(MediaError::MissingAttribute { kind: "untyped", attribute: "type" })?;

        match kind.to_ascii_lowercase().as_str() {
            "image" => {
                let src = present(&attributes.src)
                    .ok_or(MediaError::MissingAttribute { kind: "image", attribute: "src" })?;
                Ok(MediaItem::Image {
                    src: src.to_string(),
                    alt: present(&attributes.alt).map(str::to_string),
                })
            }
            "video" => {
                let platform = present(&attributes.platform).map(Platform::from_hint);

                if let Some(url) = present(&attributes.video_url) {
                    let reference = match platform {
                        Some(platform) => VideoReference::url_with_platform(url, platform),
                        None => VideoReference::url(url),
                    };
                    return Ok(MediaItem::Video { reference });
                }

                match (platform, present(&attributes.video_id)) {
                    (Some(platform), Some(video_id)) => Ok(MediaItem::Video {
                        reference: VideoReference::id(platform, video_id),
                    }),
                    (None, Some(_)) => {
                        Err(MediaError::MissingAttribute { kind: "video", attribute: "platform" })
                    }
                    _ => Err(MediaError::MissingAttribute { kind: "video", attribute: "video-url" }),
                }
            }
            other => Err(MediaError::UnknownType(other.to_string())),
        }
    }

    /// Check if this is a video item
    pub fn is_video(&self) -> bool {
        matches!(self, MediaItem::Video { .. })
    }

    /// Get the video reference if applicable
    pub fn as_video(&self) -> Option<&VideoReference> {
        match self {
            MediaItem::Video { reference } => Some(reference),
            MediaItem::Image { .. } => None,
        }
    }
}

/// Position of a card in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Gallery card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card position
    pub id: CardId,
    /// Parsed media; `None` when the attributes were invalid
    pub item: Option<MediaItem>,
}

impl Card {
    /// Whether clicking the card can open anything
    pub fn is_inert(&self) -> bool {
        self.item.is_none()
    }
}

/// Ordered collection of cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    /// Parse every card, keeping invalid ones as inert cards
    pub fn from_cards(attributes: impl IntoIterator<Item = CardAttributes>) -> Self {
        let cards = attributes
            .into_iter()
            .enumerate()
            .map(|(index, attrs)| {
                let id = CardId(index);
                let item = match MediaItem::from_attributes(&attrs) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        tracing::warn!(card = %id, "Ignoring card: {}", e);
                        None
                    }
                };
                Card { id, item }
            })
            .collect();

        Self { cards }
    }

    /// All cards in order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by ID
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.0)
    }

    /// Media item of a card, if the card exists and is valid
    pub fn item(&self, id: CardId) -> Option<&MediaItem> {
        self.get(id).and_then(|card| card.item.as_ref())
    }

    /// IDs of every card
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the gallery has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_card() {
        let item = MediaItem::from_attributes(&CardAttributes::image("img/one.jpg")).unwrap();
        assert_eq!(item, MediaItem::Image { src: "img/one.jpg".to_string(), alt: None });
        assert!(!item.is_video());
    }

    #[test]
    fn test_image_card_requires_src() {
        let attrs = CardAttributes { kind: Some("image".to_string()), ..Default::default() };
        assert_eq!(
            MediaItem::from_attributes(&attrs),
            Err(MediaError::MissingAttribute { kind: "image", attribute: "src" })
        );

        let attrs = CardAttributes::image("   ");
        assert!(MediaItem::from_attributes(&attrs).is_err());
    }

    #[test]
    fn test_video_url_card() {
        let item =
            MediaItem::from_attributes(&CardAttributes::video_url("https://vimeo.com/1")).unwrap();
        assert_eq!(item.as_video(), Some(&VideoReference::url("https://vimeo.com/1")));
    }

    #[test]
    fn test_video_url_card_with_platform_hint() {
        let mut attrs = CardAttributes::video_url("https://youtu.be/abc");
        attrs.platform = Some("YouTube".to_string());
        let item = MediaItem::from_attributes(&attrs).unwrap();
        assert_eq!(
            item.as_video(),
            Some(&VideoReference::url_with_platform("https://youtu.be/abc", Platform::YouTube))
        );
    }

    #[test]
    fn test_video_id_card() {
        let item = MediaItem::from_attributes(&CardAttributes::video_id("vimeo", "76979871")).unwrap();
        assert_eq!(item.as_video(), Some(&VideoReference::id(Platform::Vimeo, "76979871")));
    }

    #[test]
    fn test_video_card_missing_source() {
        let attrs = CardAttributes { kind: Some("video".to_string()), ..Default::default() };
        assert_eq!(
            MediaItem::from_attributes(&attrs),
            Err(MediaError::MissingAttribute { kind: "video", attribute: "video-url" })
        );

        let attrs = CardAttributes {
            kind: Some("video".to_string()),
            video_id: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(
            MediaItem::from_attributes(&attrs),
            Err(MediaError::MissingAttribute { kind: "video", attribute: "platform" })
        );
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let attrs = CardAttributes { kind: Some("audio".to_string()), ..Default::default() };
        assert_eq!(
            MediaItem::from_attributes(&attrs),
            Err(MediaError::UnknownType("audio".to_string()))
        );
        assert!(MediaItem::from_attributes(&CardAttributes::default()).is_err());
    }

    #[test]
    fn test_from_pairs() {
        let attrs = CardAttributes::from_pairs([
            ("class", "project-item"),
            ("data-type", "video"),
            ("data-platform", "youtube"),
            ("data-video-id", "dQw4w9WgXcQ"),
        ]);
        assert_eq!(attrs, CardAttributes::video_id("youtube", "dQw4w9WgXcQ"));
    }

    #[test]
    fn test_card_attributes_deserialization() {
        let attrs: CardAttributes =
            serde_json::from_str(r#"{"type":"video","video-url":"https://vimeo.com/1"}"#).unwrap();
        assert_eq!(attrs, CardAttributes::video_url("https://vimeo.com/1"));
    }

    #[test]
    fn test_gallery_keeps_invalid_cards_inert() {
        let gallery = Gallery::from_cards(vec![
            CardAttributes::image("a.jpg"),
            CardAttributes::default(),
            CardAttributes::video_url("https://vimeo.com/1"),
        ]);

        assert_eq!(gallery.len(), 3);
        assert!(!gallery.cards()[0].is_inert());
        assert!(gallery.cards()[1].is_inert());
        assert!(gallery.item(CardId(2)).unwrap().is_video());
        assert!(gallery.item(CardId(1)).is_none());
        assert!(gallery.item(CardId(9)).is_none());
        assert_eq!(gallery.ids(), vec![CardId(0), CardId(1), CardId(2)]);
    }

    #[test]
    fn test_media_error_display() {
        let error = MediaError::MissingAttribute { kind: "image", attribute: "src" };
        assert_eq!(error.to_string(), "Missing attribute `src` on image card");
    }
}
