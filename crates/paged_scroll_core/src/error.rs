//! Error types for bootstrapping and configuring the pager.
//!
//! Navigation itself never fails: indexes are clamped and missing names fall
//! back to generated labels. Only setup can go wrong.

use thiserror::Error;

/// Errors that can occur while setting up a pager.
#[derive(Error, Debug)]
pub enum PagerError {
    /// The scroll container was not found in the document
    #[error("Scroll container not found: {selector}")]
    MissingContainer {
        /// Selector that matched nothing
        selector: String,
    },

    /// The container holds no panes to page through
    #[error("No panes matched '{selector}'")]
    NoSections {
        /// Pane selector that matched nothing
        selector: String,
    },

    /// Configuration JSON could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfig {
        /// Offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// Asset URL could not be parsed for cache busting
    #[error("Invalid asset URL '{url}': {source}")]
    InvalidUrl {
        /// URL as found in the document
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),
}

impl PagerError {
    /// Create an invalid config error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Create a DOM error from any debuggable JS failure.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PagerError>;
