//! Input adapters.
//!
//! Each adapter turns one raw device event into at most one navigation
//! request. Device quirks (swipe threshold, key mapping) stay here; the
//! controller only ever sees [`NavRequest`]s and layout triggers.

/// Where a navigation request wants to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// One section down
    Next,
    /// One section up
    Previous,
    /// First section
    First,
    /// Last section
    Last,
    /// Explicit target index, clamped by the controller
    To(i64),
}

/// A navigation request produced by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRequest {
    pub navigation: Navigation,
    /// Dropped at the front door while a transition is running.
    ///
    /// Relative moves (wheel, arrows, swipes) are debounced. Explicit jumps
    /// always reach `go_to_section`, whose own lock still applies.
    pub debounced: bool,
}

impl NavRequest {
    pub fn debounced(navigation: Navigation) -> Self {
        Self {
            navigation,
            debounced: true,
        }
    }

    pub fn explicit(navigation: Navigation) -> Self {
        Self {
            navigation,
            debounced: false,
        }
    }
}

/// Keyboard keys the pager cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

/// Parse a navigation button's target section attribute.
///
/// Surrounding whitespace is allowed. Anything that is not an integer gives
/// `None`; out-of-range indices are left for the controller to clamp.
pub fn parse_nav_target(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// What caused a layout recompute. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTrigger {
    /// Window resize or orientation change
    Resize,
    /// Nodes or text changed under the container
    ContentMutation,
    /// An image finished loading
    ImageLoaded,
    /// An image failed to load; handled exactly like a load
    ImageFailed,
    /// Web fonts are ready
    FontsReady,
    /// Window `load` fired
    WindowLoad,
}

/// Raw input, already stripped of platform types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f64 },
    Key(Key),
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
    /// Click on an external navigation button
    NavButton { target: i64 },
    /// Click on the indicator's toggle button
    DropdownToggle,
    /// Click on a dropdown entry
    DropdownSelect(usize),
    /// Click anywhere outside the indicator
    OutsideClick,
    Layout(LayoutTrigger),
}

/// Wheel: direction of `deltaY` picks next/previous.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelAdapter;

impl WheelAdapter {
    pub fn translate(&self, delta_y: f64) -> Option<NavRequest> {
        if delta_y > 0.0 {
            Some(NavRequest::debounced(Navigation::Next))
        } else if delta_y < 0.0 {
            Some(NavRequest::debounced(Navigation::Previous))
        } else {
            None
        }
    }
}

/// Keyboard: arrows and paging keys step, Home/End jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardAdapter;

impl KeyboardAdapter {
    pub fn translate(&self, key: Key) -> Option<NavRequest> {
        match key {
            Key::Down | Key::PageDown => Some(NavRequest::debounced(Navigation::Next)),
            Key::Up | Key::PageUp => Some(NavRequest::debounced(Navigation::Previous)),
            Key::Home => Some(NavRequest::explicit(Navigation::First)),
            Key::End => Some(NavRequest::explicit(Navigation::Last)),
            Key::Other => None,
        }
    }
}

/// Touch: remembers where the finger went down and compares on release.
#[derive(Debug, Clone, Copy)]
pub struct SwipeAdapter {
    threshold: f64,
    start_y: Option<f64>,
}

impl SwipeAdapter {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Finish a gesture. Travel below the threshold is noise, and a tap
    /// with no travel never navigates.
    ///
    /// Finger moving up (start below end on screen) scrolls to the next
    /// section, like dragging the page.
    pub fn touch_end(&mut self, y: f64) -> Option<NavRequest> {
        let start = self.start_y.take()?;
        let travel = start - y;
        if travel == 0.0 || travel.abs() < self.threshold {
            return None;
        }
        if travel > 0.0 {
            Some(NavRequest::debounced(Navigation::Next))
        } else {
            Some(NavRequest::debounced(Navigation::Previous))
        }
    }
}

impl Default for SwipeAdapter {
    fn default() -> Self {
        Self::new(crate::constants::SWIPE_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_direction() {
        let wheel = WheelAdapter;
        assert_eq!(
            wheel.translate(120.0),
            Some(NavRequest::debounced(Navigation::Next))
        );
        assert_eq!(
            wheel.translate(-3.0),
            Some(NavRequest::debounced(Navigation::Previous))
        );
        assert_eq!(wheel.translate(0.0), None);
    }

    #[test]
    fn test_key_mapping() {
        let keys = KeyboardAdapter;
        assert_eq!(keys.translate(Key::PageDown).unwrap().navigation, Navigation::Next);
        assert_eq!(keys.translate(Key::Up).unwrap().navigation, Navigation::Previous);
        assert_eq!(keys.translate(Key::Other), None);

        let end = keys.translate(Key::End).unwrap();
        assert_eq!(end.navigation, Navigation::Last);
        assert!(!end.debounced, "Home/End are explicit jumps");
    }

    #[test]
    fn test_dom_key_names() {
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::Down);
        assert_eq!(Key::from_dom_key("End"), Key::End);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
    }

    #[test]
    fn test_nav_target_parsing() {
        assert_eq!(parse_nav_target("3"), Some(3));
        assert_eq!(parse_nav_target(" 3 "), Some(3));
        assert_eq!(parse_nav_target("-1"), Some(-1));
        assert_eq!(parse_nav_target("abc"), None);
        assert_eq!(parse_nav_target(""), None);
        assert_eq!(parse_nav_target("2.5"), None);
    }

    #[test]
    fn test_swipe_below_threshold_ignored() {
        let mut swipe = SwipeAdapter::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(251.0), None);
    }

    #[test]
    fn test_swipe_at_threshold_counts() {
        let mut swipe = SwipeAdapter::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0).unwrap().navigation, Navigation::Next);

        swipe.touch_start(250.0);
        assert_eq!(swipe.touch_end(400.0).unwrap().navigation, Navigation::Previous);
    }

    #[test]
    fn test_tap_never_navigates() {
        let mut swipe = SwipeAdapter::new(0.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(300.0), None);

        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(299.0).unwrap().navigation, Navigation::Next);
    }

    #[test]
    fn test_touch_end_without_start() {
        let mut swipe = SwipeAdapter::default();
        assert_eq!(swipe.touch_end(10.0), None);
    }
}
