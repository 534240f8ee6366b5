//! Embed URL resolution
//!
//! [`VideoEmbedResolver`] maps a [`VideoReference`] to an [`EmbedUrl`]. The
//! result is inserted into the page as an active iframe, so an embed URL is
//! always HTTPS on one of [`EMBED_HOSTS`] and only ever carries a validated
//! video ID and a validated origin.

use crate::reference::{
    is_vimeo_host, is_youtube_host, is_youtube_short_host, parse_video_url, Platform,
    VideoReference,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

/// YouTube privacy-enhanced embed endpoint
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";

/// Player parameters appended to every YouTube embed
pub const YOUTUBE_PLAYER_PARAMS: &str = "autoplay=1&controls=1&modestbranding=1";

/// Vimeo player endpoint
pub const VIMEO_EMBED_BASE: &str = "https://player.vimeo.com/video/";

/// Player parameters appended to every Vimeo embed
pub const VIMEO_PLAYER_PARAMS: &str = "autoplay=1&title=0&byline=0&portrait=0";

/// Hosts an [`EmbedUrl`] may point at
pub const EMBED_HOSTS: [&str; 2] = ["www.youtube-nocookie.com", "player.vimeo.com"];

/// Errors that can occur while resolving an embed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// No usable video ID could be extracted
    #[error("Unresolvable video reference: {0}")]
    UnresolvableVideoReference(String),

    /// The reference does not point at a supported platform
    #[error("Unsupported platform for video reference: {0}")]
    UnsupportedPlatform(String),

    /// The embed configuration is unusable
    #[error("Invalid embed configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Iframe source on an allow-listed embed host
///
/// Only the resolver can build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmbedUrl(String);

impl EmbedUrl {
    /// Get the URL as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Host the URL points at
    pub fn host(&self) -> &str {
        self.0
            .trim_start_matches("https://")
            .split(['/', '?'])
            .next()
            .unwrap_or_default()
    }

    /// Platform serving this embed
    pub fn platform(&self) -> Platform {
        match self.host() {
            "www.youtube-nocookie.com" => Platform::YouTube,
            "player.vimeo.com" => Platform::Vimeo,
            _ => Platform::Unknown,
        }
    }

    /// Consume into the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmbedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmbedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How the `origin` player parameter is chosen for YouTube embeds
///
/// The YouTube player checks the embedding page's origin. Pages opened from
/// the local filesystem report `file://`, which the player rejects, so a
/// stand-in origin has to be supplied for that case.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum OriginPolicy {
    /// Never send an origin
    #[default]
    Omit,
    /// Always send this origin
    Fixed {
        /// Origin such as `https://example.com`
        origin: String,
    },
    /// Send the page's own origin, or the fallback when it has none
    #[serde(rename_all = "camelCase")]
    PageOrigin {
        /// Used when the page is served from `file://` or has no origin
        local_fallback: String,
    },
}

/// Embed configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// Origin parameter policy
    pub origin_policy: OriginPolicy,
    /// Origin of the page hosting the gallery, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_origin: Option<String>,
}

impl EmbedConfig {
    /// Create a configuration that sends no origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin policy
    pub fn with_origin_policy(mut self, policy: OriginPolicy) -> Self {
        self.origin_policy = policy;
        self
    }

    /// Set the page origin
    pub fn with_page_origin(mut self, origin: impl Into<String>) -> Self {
        self.page_origin = Some(origin.into());
        self
    }

    /// Check that every origin this configuration could send is valid
    pub fn validate(&self) -> Result<()> {
        match &self.origin_policy {
            OriginPolicy::Omit => Ok(()),
            OriginPolicy::Fixed { origin } => normalize_origin(origin).map(|_| ()),
            OriginPolicy::PageOrigin { local_fallback } => {
                normalize_origin(local_fallback)?;
                self.effective_origin().map(|_| ())
            }
        }
    }

    /// Origin to send with YouTube embeds, if any
    pub fn effective_origin(&self) -> Result<Option<String>> {
        match &self.origin_policy {
            OriginPolicy::Omit => Ok(None),
            OriginPolicy::Fixed { origin } => normalize_origin(origin).map(Some),
            OriginPolicy::PageOrigin { local_fallback } => {
                let served = self.page_origin.as_deref().filter(|origin| is_served_origin(origin));
                match served {
                    Some(origin) => normalize_origin(origin).map(Some),
                    None => normalize_origin(local_fallback).map(Some),
                }
            }
        }
    }
}

/// Whether a page origin came from a server rather than the filesystem
fn is_served_origin(origin: &str) -> bool {
    let origin = origin.trim();
    !origin.is_empty() && origin != "null" && !origin.starts_with("file:")
}

/// Reduce an origin to `scheme://host[:port]`, rejecting non-HTTP(S) values
fn normalize_origin(raw: &str) -> Result<String> {
    let invalid = || EmbedError::InvalidConfig(format!("origin must be an http(s) origin: {raw}"));

    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    Ok(url.origin().ascii_serialization())
}

/// Resolver from video references to embeddable URLs
#[derive(Debug, Clone, Default)]
pub struct VideoEmbedResolver {
    config: EmbedConfig,
}

impl VideoEmbedResolver {
    /// Create a resolver with the given configuration
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Resolve a reference into an embed URL
    pub fn resolve(&self, reference: &VideoReference) -> Result<EmbedUrl> {
        let platform = reference.platform();
        let video_id = match reference {
            VideoReference::Url { raw_url, .. } => extract_video_id(platform, raw_url)?,
            VideoReference::Id { video_id, .. } => validate_video_id(platform, video_id.trim())?,
        };

        let embed = match platform {
            Platform::YouTube => self.youtube_embed(&video_id)?,
            Platform::Vimeo => vimeo_embed(&video_id),
            Platform::Unknown => {
                return Err(EmbedError::UnsupportedPlatform(describe(reference)));
            }
        };

        tracing::debug!(%platform, %video_id, "Resolved video embed");
        Ok(embed)
    }

    /// Resolve a raw video URL
    pub fn resolve_url(&self, raw_url: &str) -> Result<EmbedUrl> {
        self.resolve(&VideoReference::url(raw_url))
    }

    /// Resolve a reference, logging and discarding any failure
    pub fn resolve_or_log(&self, reference: &VideoReference) -> Option<EmbedUrl> {
        match self.resolve(reference) {
            Ok(embed) => Some(embed),
            Err(e) => {
                tracing::warn!("Skipping video embed: {}", e);
                None
            }
        }
    }

    fn youtube_embed(&self, video_id: &str) -> Result<EmbedUrl> {
        let mut url = format!("{YOUTUBE_EMBED_BASE}{video_id}?{YOUTUBE_PLAYER_PARAMS}");
        if let Some(origin) = self.config.effective_origin()? {
            url.push_str("&origin=");
            url.push_str(&urlencoding::encode(&origin));
        }
        Ok(EmbedUrl(url))
    }
}

fn vimeo_embed(video_id: &str) -> EmbedUrl {
    EmbedUrl(format!("{VIMEO_EMBED_BASE}{video_id}?{VIMEO_PLAYER_PARAMS}"))
}

fn describe(reference: &VideoReference) -> String {
    match reference {
        VideoReference::Url { raw_url, .. } if raw_url.trim().is_empty() => {
            "empty video URL".to_string()
        }
        VideoReference::Url { raw_url, .. } => raw_url.clone(),
        VideoReference::Id { platform, video_id } => format!("{platform}:{video_id}"),
    }
}

/// Extract and validate the video ID from a raw URL
fn extract_video_id(platform: Platform, raw_url: &str) -> Result<String> {
    let unresolvable = || EmbedError::UnresolvableVideoReference(raw_url.to_string());

    if raw_url.trim().is_empty() {
        return Err(EmbedError::UnresolvableVideoReference("empty video URL".to_string()));
    }

    let url = parse_video_url(raw_url).ok_or_else(unresolvable)?;
    let candidate = match platform {
        Platform::YouTube => extract_youtube_id(&url),
        Platform::Vimeo => extract_vimeo_id(&url),
        Platform::Unknown => {
            return Err(EmbedError::UnsupportedPlatform(raw_url.to_string()));
        }
    };

    let candidate = candidate.ok_or_else(unresolvable)?;
    validate_video_id(platform, &candidate).map_err(|_| unresolvable())
}

fn extract_youtube_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    // youtu.be/<id>
    if is_youtube_short_host(host) {
        return url
            .path_segments()?
            .rfind(|segment| !segment.is_empty())
            .map(str::to_string);
    }

    if !is_youtube_host(host) {
        return None;
    }

    // youtube.com/watch?v=<id>
    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v") {
        return Some(id.into_owned()).filter(|id| !id.is_empty());
    }

    // youtube.com/embed/<id>, /shorts/<id>, /live/<id>
    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());
    match (segments.next(), segments.next()) {
        (Some("embed" | "shorts" | "live" | "v"), Some(id)) => Some(id.to_string()),
        _ => None,
    }
}

fn extract_vimeo_id(url: &Url) -> Option<String> {
    if !is_vimeo_host(url.host_str()?) {
        return None;
    }

    url.path_segments()?.rfind(|segment| !segment.is_empty()).map(str::to_string)
}

/// Check a video ID against the platform's ID shape
fn validate_video_id(platform: Platform, video_id: &str) -> Result<String> {
    static YOUTUBE_ID: OnceLock<Regex> = OnceLock::new();
    static VIMEO_ID: OnceLock<Regex> = OnceLock::new();

    let valid = match platform {
        Platform::YouTube => YOUTUBE_ID
            .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap())
            .is_match(video_id),
        Platform::Vimeo => {
            VIMEO_ID.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap()).is_match(video_id)
        }
        Platform::Unknown => {
            return Err(EmbedError::UnsupportedPlatform(format!("unknown:{video_id}")));
        }
    };

    if valid {
        Ok(video_id.to_string())
    } else {
        Err(EmbedError::UnresolvableVideoReference(format!("{platform}:{video_id}")))
    }
}
