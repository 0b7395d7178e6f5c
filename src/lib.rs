//! paged_scroll - one-section-at-a-time scrolling for a single-page resume
//!
//! The state machine lives in `paged_scroll_core`. This crate binds it to the
//! browser DOM for wasm builds, and to a simulated page driven by line
//! commands for native builds.

pub use paged_scroll_core::{PagedScrollController, PagerConfig, PagerError};

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
