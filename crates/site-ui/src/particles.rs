//! Background particles
//!
//! Purely decorative: each particle gets a random position, drift, speed,
//! size and opacity which are rendered as inline styles.

use crate::tokens::particles;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One floating particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Particle {
    /// Horizontal start position (% of container width)
    pub left_percent: f64,
    /// Vertical start position (vh)
    pub top_vh: f64,
    /// Horizontal drift over one cycle (px)
    pub drift_px: f64,
    /// Animation duration (s)
    pub duration_s: f64,
    /// Animation delay (s)
    pub delay_s: f64,
    /// Width and height (px)
    pub size_px: f64,
    /// Opacity
    pub opacity: f64,
}

impl Particle {
    /// Generate a particle
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.random::<f64>() * 100.0,
            top_vh: rng.random::<f64>() * 100.0,
            drift_px: (rng.random::<f64>() - particles::DRIFT_BIAS) * particles::DRIFT_SCALE_PX,
            duration_s: particles::DURATION_MIN_S + rng.random::<f64>() * particles::DURATION_SPREAD_S,
            delay_s: rng.random::<f64>() * particles::DELAY_MAX_S,
            size_px: particles::SIZE_MIN_PX + rng.random::<f64>() * particles::SIZE_SPREAD_PX,
            opacity: particles::OPACITY_MIN + rng.random::<f64>() * particles::OPACITY_SPREAD,
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}vh; --drift: {:.3}px; animation-duration: {:.3}s; \
             animation-delay: {:.3}s; width: {size:.3}px; height: {size:.3}px; opacity: {:.3};",
            self.left_percent,
            self.top_vh,
            self.drift_px,
            self.duration_s,
            self.delay_s,
            self.opacity,
            size = self.size_px,
        )
    }
}

/// Set of particles created on mount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Generate `count` particles with the thread-local generator
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, &mut rand::rng())
    }

    /// Generate `count` particles with the given generator
    pub fn with_rng<R: Rng>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng)).collect();
        Self { particles }
    }

    /// Generated particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the field is empty
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Render every particle as a `<div class="particle">`
    pub fn to_html(&self) -> String {
        self.particles
            .iter()
            .map(|p| format!(r#"<div class="particle" style="{}"></div>"#, p.style()))
            .collect()
    }
}
