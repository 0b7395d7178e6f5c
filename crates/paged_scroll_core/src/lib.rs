//! paged_scroll_core - platform-agnostic paged scroll controller
//!
//! A page is a vertical stack of full-viewport panes shown one at a time.
//! This crate holds the state machine that decides which pane is visible,
//! the input adapters feeding it, and the section indicator view model. The
//! platform (browser DOM, or the in-memory [`HeadlessSurface`]) plugs in
//! through the [`PageSurface`] trait.

pub mod cache_bust;
pub mod config;
pub mod constants;
mod controller;
pub mod error;
mod headless;
mod indicator;
pub mod input;
mod section;
mod state;
mod surface;

pub use config::{LogLevel, PagerConfig};
pub use controller::PagedScrollController;
pub use error::{PagerError, Result};
pub use headless::{HeadlessSurface, Wakeup};
pub use indicator::{DropdownEntry, IndicatorView, SectionIndicator};
pub use input::{InputEvent, Key, LayoutTrigger, NavRequest, Navigation, parse_nav_target};
pub use section::{Section, SectionNames};
pub use state::{OffsetTable, Phase, ScrollState};
pub use surface::{Motion, PageSurface};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PagerConfig;
    pub use crate::controller::PagedScrollController;
    pub use crate::input::{InputEvent, Key, LayoutTrigger};
    pub use crate::surface::{Motion, PageSurface};
}
