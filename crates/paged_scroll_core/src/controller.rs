//! Paged scroll controller.
//!
//! Owns the scroll state and the input adapters, and drives a
//! [`PageSurface`]. Two phases: `Idle` and `Transitioning`. An accepted
//! animated navigation enters `Transitioning` and schedules a settle timer;
//! the timer's callback returns to `Idle`. Animated navigation requested
//! while transitioning is dropped, never queued. Instant snaps (layout
//! corrections) ignore the lock and leave the phase alone, and do not cancel
//! a pending settle timer, so the lock may be released after a snap has
//! already moved the page.

use std::time::Duration;

use crate::config::PagerConfig;
use crate::error::{PagerError, Result};
use crate::indicator::{IndicatorView, SectionIndicator};
use crate::input::{
    InputEvent, KeyboardAdapter, NavRequest, Navigation, SwipeAdapter, WheelAdapter,
};
use crate::section::{Section, SectionNames};
use crate::state::{OffsetTable, Phase, ScrollState};
use crate::surface::{Motion, PageSurface};

/// State machine behind the paged scroll presentation.
pub struct PagedScrollController<S: PageSurface> {
    surface: S,
    state: ScrollState,
    indicator: SectionIndicator,
    settle_duration: Duration,
    wheel: WheelAdapter,
    keyboard: KeyboardAdapter,
    swipe: SwipeAdapter,
    initialized: bool,
}

impl<S: PageSurface> PagedScrollController<S> {
    /// Bind a controller to a surface.
    ///
    /// Fails if the surface has no panes. Nothing is measured or moved until
    /// [`initialize`](Self::initialize).
    pub fn new(surface: S, config: &PagerConfig) -> Result<Self> {
        let section_count = surface.section_count();
        if section_count == 0 {
            return Err(PagerError::NoSections {
                selector: config.pane_selector.clone(),
            });
        }

        let names = SectionNames::new(config.section_names.clone());
        if !names.covers(section_count) {
            log::warn!(
                "{} of {} panes have no registered name, using generated labels",
                section_count - names.len(),
                section_count
            );
        }

        Ok(Self {
            surface,
            state: ScrollState::new(section_count),
            indicator: SectionIndicator::new(names),
            settle_duration: config.settle_duration(),
            wheel: WheelAdapter,
            keyboard: KeyboardAdapter,
            swipe: SwipeAdapter::new(config.swipe_threshold_px),
            initialized: false,
        })
    }

    /// Measure the page, draw the indicator and snap to the current section
    /// on the next frame.
    ///
    /// Safe to call again once fonts or images have loaded: later calls just
    /// re-measure and re-snap.
    pub fn initialize(&mut self) {
        if self.initialized {
            log::debug!("Pager already initialized, re-measuring");
        } else {
            log::info!(
                "Initializing pager with {} sections",
                self.state.section_count()
            );
            self.initialized = true;
        }
        self.recompute_layout();
        self.render_indicator();
    }

    /// Re-measure every pane and schedule an instant snap to the current
    /// section.
    ///
    /// The offset table is rebuilt from scratch each time, so bursts of
    /// triggers are harmless.
    pub fn recompute_layout(&mut self) {
        self.surface.reset_transform();
        let measured = self.surface.measure_offsets();
        if measured.len() != self.state.section_count() {
            log::warn!(
                "Measured {} offsets for {} sections",
                measured.len(),
                self.state.section_count()
            );
        }
        log::trace!("Offsets recomputed: {:?}", measured);
        self.state.replace_offsets(OffsetTable::new(measured));
        self.surface.request_frame();
    }

    /// Frame callback: snap to the current section with fresh offsets.
    pub fn on_frame(&mut self) {
        let current = self.state.current() as i64;
        self.go_to_section(current, Motion::Instant);
    }

    /// Move to `target`, clamped into the valid range.
    ///
    /// Returns `false` if an animated move was dropped because another
    /// transition holds the lock.
    pub fn go_to_section(&mut self, target: i64, motion: Motion) -> bool {
        let index = self.state.clamp(target);

        if motion == Motion::Animated && self.state.is_transitioning() {
            log::trace!("Dropped navigation to section {} during transition", index);
            return false;
        }

        let y = -self.state.offsets().offset(index);
        match motion {
            Motion::Animated => {
                self.state.begin_transition();
                self.surface.apply_offset(y, Motion::Animated);
                if !self.surface.schedule_settle(self.settle_duration) {
                    log::warn!("No settle timer available, releasing transition lock");
                    self.state.end_transition();
                }
            }
            Motion::Instant => self.surface.apply_offset(y, Motion::Instant),
        }

        let previous = self.state.current();
        self.state.set_current(index);

        if motion == Motion::Animated {
            log::debug!("Section {} -> {}", previous, index);
            self.indicator.close();
        }
        self.render_indicator();
        true
    }

    /// Settle timer callback: release the transition lock.
    pub fn settle(&mut self) {
        if self.state.is_transitioning() {
            self.state.end_transition();
            log::trace!("Transition settled at section {}", self.state.current());
        }
    }

    /// Resolve a request against the current section and navigate.
    ///
    /// Debounced requests are dropped outright while transitioning.
    pub fn navigate(&mut self, request: NavRequest) -> bool {
        if request.debounced && self.state.is_transitioning() {
            log::trace!("Ignored {:?} during transition", request.navigation);
            return false;
        }

        let current = self.state.current() as i64;
        let target = match request.navigation {
            Navigation::Next => current + 1,
            Navigation::Previous => current - 1,
            Navigation::First => 0,
            Navigation::Last => self.state.last_index() as i64,
            Navigation::To(index) => index,
        };
        self.go_to_section(target, Motion::Animated)
    }

    /// Feed one input event through its adapter.
    ///
    /// Returns whether the event changed anything: an accepted navigation, a
    /// dropdown change or a layout recompute.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let request = match event {
            InputEvent::Wheel { delta_y } => self.wheel.translate(delta_y),
            InputEvent::Key(key) => self.keyboard.translate(key),
            InputEvent::TouchStart { y } => {
                self.swipe.touch_start(y);
                None
            }
            InputEvent::TouchEnd { y } => self.swipe.touch_end(y),
            InputEvent::NavButton { target } => {
                Some(NavRequest::explicit(Navigation::To(target)))
            }
            InputEvent::DropdownToggle => {
                self.toggle_dropdown();
                return true;
            }
            InputEvent::DropdownSelect(index) => return self.select_dropdown_entry(index),
            InputEvent::OutsideClick => return self.close_dropdown(),
            InputEvent::Layout(trigger) => {
                log::trace!("Layout trigger: {:?}", trigger);
                self.recompute_layout();
                return true;
            }
        };

        match request {
            Some(request) => self.navigate(request),
            None => false,
        }
    }

    /// Open or close the dropdown.
    pub fn toggle_dropdown(&mut self) {
        let open = self.indicator.toggle();
        log::trace!("Dropdown {}", if open { "opened" } else { "closed" });
        self.render_indicator();
    }

    /// Close the dropdown. Returns whether it was open.
    pub fn close_dropdown(&mut self) -> bool {
        let was_open = self.indicator.close();
        if was_open {
            self.render_indicator();
        }
        was_open
    }

    /// Jump to a dropdown entry and close the dropdown, whether or not the
    /// jump was accepted.
    pub fn select_dropdown_entry(&mut self, index: usize) -> bool {
        let target = i64::try_from(index).unwrap_or(i64::MAX);
        let moved = self.navigate(NavRequest::explicit(Navigation::To(target)));
        self.close_dropdown();
        moved
    }

    fn render_indicator(&mut self) {
        let view = self.indicator_view();
        self.surface.render_indicator(&view);
    }

    /// Current indicator view.
    pub fn indicator_view(&self) -> IndicatorView {
        self.indicator
            .view(self.state.current(), self.state.section_count())
    }

    /// All sections with their names and measured offsets.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let offsets = self.state.offsets();
        (0..self.state.section_count())
            .map(|index| Section {
                index,
                name: self.indicator.names().label(index),
                offset: offsets.is_measured(index).then(|| offsets.offset(index)),
            })
            .collect()
    }

    pub fn current_index(&self) -> usize {
        self.state.current()
    }

    pub fn section_count(&self) -> usize {
        self.state.section_count()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.indicator.is_open()
    }

    pub fn offsets(&self) -> &OffsetTable {
        self.state.offsets()
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn settle_duration(&self) -> Duration {
        self.settle_duration
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use crate::input::Key;

    fn controller(count: usize) -> PagedScrollController<HeadlessSurface> {
        let surface = HeadlessSurface::uniform(count, 800.0);
        let mut pager = PagedScrollController::new(surface, &PagerConfig::default()).unwrap();
        pager.initialize();
        pager.advance(Duration::ZERO);
        pager
    }

    #[test]
    fn test_no_sections_rejected() {
        let surface = HeadlessSurface::new(Vec::new());
        let result = PagedScrollController::new(surface, &PagerConfig::default());
        assert!(matches!(result, Err(PagerError::NoSections { .. })));
    }

    #[test]
    fn test_initialize_snaps_to_first_section() {
        let pager = controller(3);
        assert_eq!(pager.current_index(), 0);
        assert_eq!(pager.offsets().as_slice(), &[0.0, 800.0, 1600.0]);
        assert_eq!(pager.surface().last_motion(), Some(Motion::Instant));
        assert_eq!(pager.surface().transform(), 0.0);
        assert_eq!(pager.phase(), Phase::Idle);
    }

    #[test]
    fn test_lock_released_when_no_settle_timer() {
        let mut pager = controller(4);
        pager.surface_mut().set_timers_unavailable(true);

        assert!(pager.go_to_section(2, Motion::Animated));
        assert_eq!(pager.current_index(), 2);
        assert_eq!(pager.phase(), Phase::Idle);

        assert!(pager.handle_input(InputEvent::Key(Key::Down)));
        assert_eq!(pager.current_index(), 3);
    }

    #[test]
    fn test_go_to_section_locks_and_settles() {
        let mut pager = controller(5);
        assert!(pager.go_to_section(2, Motion::Animated));
        assert_eq!(pager.phase(), Phase::Transitioning);
        assert_eq!(pager.surface().transform(), -1600.0);

        pager.advance(Duration::from_millis(849));
        assert!(pager.is_transitioning());
        pager.advance(Duration::from_millis(1));
        assert_eq!(pager.phase(), Phase::Idle);
    }

    #[test]
    fn test_animated_request_dropped_while_locked() {
        let mut pager = controller(5);
        pager.go_to_section(1, Motion::Animated);
        assert!(!pager.go_to_section(3, Motion::Animated));
        assert_eq!(pager.current_index(), 1);
        assert!(pager.is_transitioning());
    }

    #[test]
    fn test_instant_snap_bypasses_lock() {
        let mut pager = controller(5);
        pager.go_to_section(1, Motion::Animated);
        assert!(pager.go_to_section(4, Motion::Instant));
        assert_eq!(pager.current_index(), 4);
        assert!(pager.is_transitioning(), "snap leaves the phase alone");
        assert_eq!(pager.surface().pending_settles(), 1, "timer is not cancelled");
    }

    #[test]
    fn test_clamping() {
        let mut pager = controller(4);
        pager.go_to_section(-7, Motion::Instant);
        assert_eq!(pager.current_index(), 0);
        pager.go_to_section(99, Motion::Instant);
        assert_eq!(pager.current_index(), 3);
        assert_eq!(pager.surface().transform(), -2400.0);
    }

    #[test]
    fn test_navigation_closes_dropdown() {
        let mut pager = controller(4);
        pager.handle_input(InputEvent::DropdownToggle);
        assert!(pager.is_dropdown_open());
        pager.handle_input(InputEvent::Key(Key::Down));
        assert!(!pager.is_dropdown_open());
        assert_eq!(pager.surface().indicator().unwrap().toggle_glyph, "▼");
    }

    #[test]
    fn test_layout_snap_keeps_dropdown_open() {
        let mut pager = controller(4);
        pager.toggle_dropdown();
        pager.handle_input(InputEvent::Layout(crate::input::LayoutTrigger::Resize));
        pager.advance(Duration::ZERO);
        assert!(pager.is_dropdown_open());
    }

    #[test]
    fn test_sections_listing() {
        let config = PagerConfig::default().with_section_names(["Profile"]);
        let mut pager =
            PagedScrollController::new(HeadlessSurface::uniform(2, 500.0), &config).unwrap();
        assert_eq!(pager.sections()[1].offset, None);

        pager.initialize();
        let sections = pager.sections();
        assert_eq!(sections[0].name, "Profile");
        assert_eq!(sections[1].name, "Section 2");
        assert_eq!(sections[1].offset, Some(500.0));
    }
}
