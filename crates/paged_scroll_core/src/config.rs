//! Pager configuration.
//!
//! The configuration is plain JSON. In the browser it is read from an inline
//! `<script type="application/json">` element, natively from a file. Every
//! field has a default, so `{}` is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{self, dom};
use crate::error::{PagerError, Result};

/// Current configuration format version.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level, used by backends that take a single level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Pager configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Selector of the scroll container
    pub container_selector: String,

    /// Selector of the panes inside the container
    pub pane_selector: String,

    /// Display names, parallel to the panes in document order
    pub section_names: Vec<String>,

    /// Transition lock duration in milliseconds
    pub settle_ms: u64,

    /// Minimum swipe travel in pixels
    pub swipe_threshold_px: f64,

    /// Attribute carrying the target index on navigation buttons
    pub nav_target_attribute: String,

    /// Rewrite static asset URLs with a timestamp parameter on load
    pub cache_bust: bool,

    /// Log verbosity
    pub log_level: LogLevel,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            container_selector: dom::CONTAINER_SELECTOR.to_string(),
            pane_selector: dom::PANE_SELECTOR.to_string(),
            section_names: Vec::new(),
            settle_ms: constants::SETTLE_DURATION.as_millis() as u64,
            swipe_threshold_px: constants::SWIPE_THRESHOLD_PX,
            nav_target_attribute: dom::NAV_TARGET_ATTRIBUTE.to_string(),
            cache_bust: true,
            log_level: LogLevel::default(),
        }
    }
}

impl PagerConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PagerConfig = serde_json::from_str(json)?;
        config.validate()?;
        if config.version != CONFIG_VERSION {
            log::warn!(
                "Config version {} differs from supported version {}",
                config.version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.settle_ms == 0 {
            return Err(PagerError::invalid_config(
                "settle_ms",
                "must be greater than zero",
            ));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err(PagerError::invalid_config(
                "swipe_threshold_px",
                format!("must be a positive number, got {}", self.swipe_threshold_px),
            ));
        }
        if self.container_selector.trim().is_empty() {
            return Err(PagerError::invalid_config("container_selector", "is empty"));
        }
        if self.pane_selector.trim().is_empty() {
            return Err(PagerError::invalid_config("pane_selector", "is empty"));
        }
        if self.nav_target_attribute.trim().is_empty() {
            return Err(PagerError::invalid_config("nav_target_attribute", "is empty"));
        }
        Ok(())
    }

    /// Transition lock duration.
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Builder-style setter for section names.
    pub fn with_section_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_names = names.into_iter().map(Into::into).collect();
        self
    }
}
