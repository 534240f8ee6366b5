//! Video references and platform detection
//!
//! A gallery card points at a video in one of two shapes: a raw URL copied
//! from the platform (optionally with a declared platform hint), or an
//! explicit platform + video ID pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::{ParseError, Url};

/// Video hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube (youtube.com, youtu.be)
    YouTube,
    /// Vimeo (vimeo.com)
    Vimeo,
    /// Anything else
    Unknown,
}

impl Platform {
    /// Get the platform as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Vimeo => "vimeo",
            Platform::Unknown => "unknown",
        }
    }

    /// Parse a declared platform hint such as `data-platform="YouTube"`
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_ascii_lowercase().as_str() {
            "youtube" => Platform::YouTube,
            "vimeo" => Platform::Vimeo,
            _ => Platform::Unknown,
        }
    }

    /// Detect the platform of a raw video URL from its host
    pub fn detect(raw_url: &str) -> Self {
        let Some(url) = parse_video_url(raw_url) else {
            return Platform::Unknown;
        };

        match url.host_str() {
            Some(host) if is_youtube_host(host) => Platform::YouTube,
            Some(host) if is_vimeo_host(host) => Platform::Vimeo,
            _ => Platform::Unknown,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a single video, as declared on a gallery card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoReference {
    /// Raw video URL, e.g. `https://youtu.be/dQw4w9WgXcQ`
    #[serde(rename_all = "camelCase")]
    Url {
        /// URL as written on the card
        #[serde(rename = "url")]
        raw_url: String,
        /// Declared platform, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<Platform>,
    },
    /// Pre-split platform and video ID
    #[serde(rename_all = "camelCase")]
    Id {
        /// Hosting platform
        platform: Platform,
        /// Platform-specific video ID
        video_id: String,
    },
}

impl VideoReference {
    /// Create a reference from a raw URL
    pub fn url(raw_url: impl Into<String>) -> Self {
        VideoReference::Url { raw_url: raw_url.into(), platform: None }
    }

    /// Create a reference from a raw URL with a declared platform
    pub fn url_with_platform(raw_url: impl Into<String>, platform: Platform) -> Self {
        VideoReference::Url { raw_url: raw_url.into(), platform: Some(platform) }
    }

    /// Create a reference from a platform and video ID
    pub fn id(platform: Platform, video_id: impl Into<String>) -> Self {
        VideoReference::Id { platform, video_id: video_id.into() }
    }

    /// Effective platform: the declared one, or the one detected from the URL
    pub fn platform(&self) -> Platform {
        match self {
            VideoReference::Url { raw_url, platform } => match platform {
                Some(declared) if *declared != Platform::Unknown => *declared,
                _ => Platform::detect(raw_url),
            },
            VideoReference::Id { platform, .. } => *platform,
        }
    }
}

/// Parse a raw video URL, assuming `https://` when the scheme is missing
pub(crate) fn parse_video_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", trimmed.trim_start_matches('/'))).ok()?
        }
        Err(_) => return None,
    };
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// youtu.be short links
pub(crate) fn is_youtube_short_host(host: &str) -> bool {
    host.eq_ignore_ascii_case("youtu.be")
}

pub(crate) fn is_youtube_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    is_youtube_short_host(&host)
        || host == "youtube.com"
        || host.ends_with(".youtube.com")
        || host == "youtube-nocookie.com"
        || host.ends_with(".youtube-nocookie.com")
}

pub(crate) fn is_vimeo_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    host == "vimeo.com" || host.ends_with(".vimeo.com")
}
