//! The platform seam driven by the controller.

use std::time::Duration;

use crate::indicator::IndicatorView;

/// How a transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Let the container's transition animate the move
    Animated,
    /// Jump without animating (layout corrections)
    Instant,
}

/// A page the controller can measure and move.
///
/// Implementations only perform side effects. Callbacks are delivered back by
/// the host: when a settle timer fires it calls
/// [`PagedScrollController::settle`](crate::PagedScrollController::settle),
/// when a requested frame arrives it calls
/// [`PagedScrollController::on_frame`](crate::PagedScrollController::on_frame).
pub trait PageSurface {
    /// Number of panes. Fixed for the lifetime of the page.
    fn section_count(&self) -> usize;

    /// Put the container back at `translateY(0)` so panes can be measured.
    fn reset_transform(&mut self);

    /// Top offset of every pane relative to the container, in order.
    fn measure_offsets(&self) -> Vec<f64>;

    /// Translate the container vertically by `y` pixels.
    fn apply_offset(&mut self, y: f64, motion: Motion);

    /// Arrange for `settle` to be called once after `after` elapses.
    ///
    /// Returns `false` if no timer could be set up. The controller then
    /// releases the lock itself.
    fn schedule_settle(&mut self, after: Duration) -> bool;

    /// Arrange for `on_frame` to be called before the next paint.
    fn request_frame(&mut self);

    /// Draw the indicator.
    fn render_indicator(&mut self, view: &IndicatorView);
}
