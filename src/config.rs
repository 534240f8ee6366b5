//! Site configuration
//!
//! Every field has a default taken from the UI tokens, so a configuration
//! file only needs the values it changes.

use crate::{Result, SiteError};
use serde::{Deserialize, Serialize};
use site_ui::tokens::{cursor, duration, particles, scroll};
use site_ui::RevealOptions;
use std::path::Path;
use std::time::Duration;
use video_embed::EmbedConfig;

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Background particles created on mount
    pub particle_count: usize,
    /// Cursor interpolation factor per frame, `(0, 1]`
    pub cursor_speed: f64,
    /// Lightbox close transition (ms)
    pub transition_ms: u64,
    /// Delay between load and hiding the preloader (ms)
    pub preloader_delay_ms: u64,
    /// Visible fraction required to reveal a card, `[0, 1]`
    pub reveal_threshold: f64,
    /// Bottom root margin of the reveal observer (px)
    pub reveal_root_margin_bottom: f64,
    /// Offset past which the page counts as scrolled (px)
    pub scrolled_threshold: f64,
    /// Video embed configuration
    pub embed: EmbedConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            particle_count: particles::COUNT,
            cursor_speed: cursor::LERP_SPEED,
            transition_ms: duration::LIGHTBOX_TRANSITION_MS,
            preloader_delay_ms: duration::PRELOADER_DELAY_MS,
            reveal_threshold: scroll::REVEAL_THRESHOLD,
            reveal_root_margin_bottom: scroll::REVEAL_ROOT_MARGIN_BOTTOM,
            scrolled_threshold: scroll::SCROLLED_THRESHOLD,
            embed: EmbedConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the particle count
    pub fn particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the cursor interpolation factor
    pub fn cursor_speed(mut self, speed: f64) -> Self {
        self.cursor_speed = speed;
        self
    }

    /// Set the lightbox close transition
    pub fn transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }

    /// Set the preloader delay
    pub fn preloader_delay_ms(mut self, ms: u64) -> Self {
        self.preloader_delay_ms = ms;
        self
    }

    /// Set the embed configuration
    pub fn embed(mut self, embed: EmbedConfig) -> Self {
        self.embed = embed;
        self
    }

    /// Lightbox close transition
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Preloader delay
    pub fn preloader_delay(&self) -> Duration {
        Duration::from_millis(self.preloader_delay_ms)
    }

    /// Scroll reveal observer options
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.reveal_threshold,
            root_margin_bottom: self.reveal_root_margin_bottom,
        }
    }

    /// Check value ranges and the embed configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.cursor_speed > 0.0 && self.cursor_speed <= 1.0) {
            return Err(SiteError::Config(format!(
                "cursorSpeed must be in (0, 1], got {}",
                self.cursor_speed
            )));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::Config(format!(
                "revealThreshold must be in [0, 1], got {}",
                self.reveal_threshold
            )));
        }

        if !self.reveal_root_margin_bottom.is_finite() || !self.scrolled_threshold.is_finite() {
            return Err(SiteError::Config("margins and thresholds must be finite".to_string()));
        }

        self.embed.validate()?;
        Ok(())
    }

    /// Load and validate a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path.as_ref()).await?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults on any failure
    pub async fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path).await {
            Ok(config) => config,
            Err(SiteError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No site config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring site config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty JSON
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
