//! Tuning tokens for the interaction layer
//!
//! Timings, interpolation factors and class names shared by the components.

// =============================================================================
// Duration Tokens
// =============================================================================

/// Durations in milliseconds
pub mod duration {
    /// Lightbox fade-out before its content is cleared (400ms)
    pub const LIGHTBOX_TRANSITION_MS: u64 = 400;
    /// Delay between window load and hiding the preloader (1000ms)
    pub const PRELOADER_DELAY_MS: u64 = 1000;
}

// =============================================================================
// Cursor Tokens
// =============================================================================

/// Custom cursor tuning
pub mod cursor {
    /// Fraction of the remaining distance covered each frame
    pub const LERP_SPEED: f64 = 0.15;
}

// =============================================================================
// Particle Tokens
// =============================================================================

/// Background particle generation ranges
pub mod particles {
    /// Particles created on mount
    pub const COUNT: usize = 50;
    /// Drift is `(r - DRIFT_BIAS) * DRIFT_SCALE_PX`
    pub const DRIFT_BIAS: f64 = 0.2;
    /// Drift scale in pixels
    pub const DRIFT_SCALE_PX: f64 = 100.0;
    /// Shortest animation (seconds)
    pub const DURATION_MIN_S: f64 = 15.0;
    /// Animation duration spread (seconds)
    pub const DURATION_SPREAD_S: f64 = 25.0;
    /// Longest start delay (seconds)
    pub const DELAY_MAX_S: f64 = 10.0;
    /// Smallest particle (pixels)
    pub const SIZE_MIN_PX: f64 = 2.0;
    /// Size spread (pixels)
    pub const SIZE_SPREAD_PX: f64 = 4.0;
    /// Faintest particle
    pub const OPACITY_MIN: f64 = 0.2;
    /// Opacity spread
    pub const OPACITY_SPREAD: f64 = 0.4;
}

// =============================================================================
// Scroll Tokens
// =============================================================================

/// Scroll reveal and scroll tracking
pub mod scroll {
    /// Visible fraction of a card required to reveal it
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    /// Bottom root margin of the reveal observer (pixels, negative shrinks)
    pub const REVEAL_ROOT_MARGIN_BOTTOM: f64 = -50.0;
    /// Offset past which the page counts as scrolled (pixels)
    pub const SCROLLED_THRESHOLD: f64 = 50.0;
}

// =============================================================================
// Class Names
// =============================================================================

/// CSS classes toggled by the components
pub mod class_names {
    /// Revealed card
    pub const VISIBLE: &str = "visible";
    /// Card dimmed while another is hovered
    pub const DIMMED: &str = "dimmed";
    /// Cursor over an interactive element
    pub const HOVER_ACTIVE: &str = "hover-active";
    /// Open lightbox
    pub const ACTIVE: &str = "active";
    /// Hidden preloader
    pub const HIDDEN: &str = "hidden";
    /// Page scrolled past the threshold
    pub const SCROLLED: &str = "scrolled";
}
