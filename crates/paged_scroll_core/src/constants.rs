//! Shared constants for the paged scroll controller.
//!
//! Timing, gesture thresholds and the default DOM contract live here so the
//! controller, the configuration defaults and the platform shells agree.

use std::time::Duration;

/// How long a transition holds the navigation lock.
///
/// Matches the length of the CSS transform transition on the container.
pub const SETTLE_DURATION: Duration = Duration::from_millis(850);

/// Minimum vertical travel (pixels) for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Prefix for generated labels of panes without a registered name.
pub const FALLBACK_LABEL_PREFIX: &str = "Section";

/// DOM contract defaults.
pub mod dom {
    /// Scroll container holding the panes.
    pub const CONTAINER_SELECTOR: &str = "#scroll-container";
    /// Individual panes, in document order.
    pub const PANE_SELECTOR: &str = ".pane";
    /// Attribute carrying the target index on external navigation buttons.
    pub const NAV_TARGET_ATTRIBUTE: &str = "data-target-section";
    /// Optional inline JSON configuration element.
    pub const CONFIG_ELEMENT_ID: &str = "paged-scroll-config";
    /// Query parameter rewritten on static asset URLs.
    pub const CACHE_BUST_PARAM: &str = "v";
}

/// Indicator glyphs and class names.
pub mod indicator {
    /// Toggle glyph while the dropdown is closed
    pub const GLYPH_CLOSED: &str = "▼";
    /// Toggle glyph while the dropdown is open
    pub const GLYPH_OPEN: &str = "▲";

    pub const ROOT_CLASS: &str = "page-indicator";
    pub const LABEL_CLASS: &str = "page-label";
    pub const TOGGLE_CLASS: &str = "page-toggle";
    pub const DROPDOWN_CLASS: &str = "page-dropdown";
    pub const OPEN_CLASS: &str = "open";
    pub const ACTIVE_CLASS: &str = "active";
}
