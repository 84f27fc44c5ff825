//! Application-wide constants
//!
//! This module contains the thresholds, delays and string literals used by the
//! view-state controllers, providing a single source of truth for them.

/// Scroll-spy constants
pub mod scroll {
    /// Vertical offset (px) past which the header collapses
    pub const SCROLLED_THRESHOLD: f32 = 50.0;

    /// Upper bound (px) of the band a section top must fall into to become active.
    /// The lower bound is the viewport top (0).
    pub const ACTIVE_BAND_BOTTOM: f32 = 300.0;
}

/// Lazy reveal constants
pub mod reveal {
    /// Fraction of a block that must be inside the viewport to reveal it
    pub const THRESHOLD: f32 = 0.1;

    /// Duration of the fade-in once a block is revealed
    pub const FADE_DURATION_MS: u64 = 1000;

    /// Stagger step between sibling blocks in a list
    pub const STAGGER_STEP_MS: u64 = 100;
}

/// Contact form constants
pub mod contact {
    /// Simulated submission round trip
    pub const SUBMIT_DELAY_MS: u64 = 1500;

    /// Upper bound accepted from config for the simulated delay
    pub const MAX_SUBMIT_DELAY_MS: u64 = 60_000;
}

/// Outbound link templates (`{id}` is replaced with the project id)
pub mod links {
    pub const ID_PLACEHOLDER: &str = "{id}";

    pub const LIVE_SITE_TEMPLATE: &str = "https://live-demo.tanvirhossain.com/project-{id}";

    pub const CODE_TEMPLATE: &str = "https://github.com/tanvirh/repo-{id}";
}

/// Config file location
pub mod config {
    pub const APP_DIR: &str = "folio-view";

    pub const FILENAME: &str = "config.json";
}

/// Settings validation bounds
pub mod validation {
    pub const MIN_WINDOW_DIMENSION: u16 = 320;

    pub const MAX_WINDOW_DIMENSION: u16 = 7680;
}
