//! A simulated page for tests and the native driver.
//!
//! Panes are stacked boxes of known height. Timers and frames run on a
//! virtual clock that only moves when [`HeadlessSurface::advance`] is called,
//! so timing behavior can be checked without sleeping.

use std::time::Duration;

use crate::controller::PagedScrollController;
use crate::indicator::IndicatorView;
use crate::surface::{Motion, PageSurface};

/// Callback the host has to deliver to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    /// A requested animation frame
    Frame,
    /// A settle timer expired
    Settle,
}

/// In-memory page surface.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pane_heights: Vec<f64>,
    transform: f64,
    transform_log: Vec<(f64, Motion)>,
    resets: usize,
    now: Duration,
    settle_deadlines: Vec<Duration>,
    frame_pending: bool,
    timers_unavailable: bool,
    indicator: Option<IndicatorView>,
}

impl HeadlessSurface {
    /// Page with the given pane heights, top to bottom.
    pub fn new(pane_heights: Vec<f64>) -> Self {
        Self {
            pane_heights,
            ..Self::default()
        }
    }

    /// Page of `count` panes of equal height.
    pub fn uniform(count: usize, height: f64) -> Self {
        Self::new(vec![height; count])
    }

    /// Change one pane's height, as if its content changed.
    ///
    /// Returns `false` if there is no such pane.
    pub fn set_pane_height(&mut self, index: usize, height: f64) -> bool {
        match self.pane_heights.get_mut(index) {
            Some(slot) => {
                *slot = height;
                true
            }
            None => false,
        }
    }

    /// Make `schedule_settle` fail, like a host that refuses timers.
    pub fn set_timers_unavailable(&mut self, unavailable: bool) {
        self.timers_unavailable = unavailable;
    }

    /// Move the virtual clock forward and collect due callbacks.
    ///
    /// A pending frame is always due. Settle timers fire in deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<Wakeup> {
        self.now += by;
        let mut wakeups = Vec::new();
        if std::mem::take(&mut self.frame_pending) {
            wakeups.push(Wakeup::Frame);
        }

        let now = self.now;
        let due = self.settle_deadlines.iter().filter(|d| **d <= now).count();
        self.settle_deadlines.retain(|d| *d > now);
        wakeups.extend(std::iter::repeat(Wakeup::Settle).take(due));
        wakeups
    }

    /// Current container translation.
    pub fn transform(&self) -> f64 {
        self.transform
    }

    /// Motion of the most recent transform, if any.
    pub fn last_motion(&self) -> Option<Motion> {
        self.transform_log.last().map(|(_, motion)| *motion)
    }

    /// Every transform applied so far.
    pub fn transform_log(&self) -> &[(f64, Motion)] {
        &self.transform_log
    }

    pub fn reset_count(&self) -> usize {
        self.resets
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_settles(&self) -> usize {
        self.settle_deadlines.len()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Last rendered indicator.
    pub fn indicator(&self) -> Option<&IndicatorView> {
        self.indicator.as_ref()
    }
}

impl PageSurface for HeadlessSurface {
    fn section_count(&self) -> usize {
        self.pane_heights.len()
    }

    fn reset_transform(&mut self) {
        self.transform = 0.0;
        self.resets += 1;
    }

    fn measure_offsets(&self) -> Vec<f64> {
        self.pane_heights
            .iter()
            .scan(0.0, |top, height| {
                let offset = *top;
                *top += height;
                Some(offset)
            })
            .collect()
    }

    fn apply_offset(&mut self, y: f64, motion: Motion) {
        self.transform = y;
        self.transform_log.push((y, motion));
    }

    fn schedule_settle(&mut self, after: Duration) -> bool {
        if self.timers_unavailable {
            return false;
        }
        self.settle_deadlines.push(self.now + after);
        self.settle_deadlines.sort();
        true
    }

    fn request_frame(&mut self) {
        self.frame_pending = true;
    }

    fn render_indicator(&mut self, view: &IndicatorView) {
        self.indicator = Some(view.clone());
    }
}

impl PagedScrollController<HeadlessSurface> {
    /// Advance the surface's clock and deliver due callbacks.
    pub fn advance(&mut self, by: Duration) {
        for wakeup in self.surface_mut().advance(by) {
            match wakeup {
                Wakeup::Frame => self.on_frame(),
                Wakeup::Settle => self.settle(),
            }
        }
    }
}
