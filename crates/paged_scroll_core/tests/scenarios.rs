//! End-to-end navigation scenarios against the headless surface.

use std::time::Duration;

use paged_scroll_core::prelude::*;
use paged_scroll_core::{HeadlessSurface, Phase};

const PANE_HEIGHT: f64 = 900.0;

fn resume_names() -> Vec<&'static str> {
    vec![
        "Profile",
        "Basics",
        "Extras",
        "Skills",
        "Career - Prabang",
        "Career - Manna Planet",
        "Career - Food Note",
        "Career - Bridgetec",
        "Career - MLsoft",
    ]
}

/// Initialized pager with its first frame delivered.
fn pager(count: usize, names: Vec<&str>) -> PagedScrollController<HeadlessSurface> {
    let config = PagerConfig::default().with_section_names(names);
    let surface = HeadlessSurface::uniform(count, PANE_HEIGHT);
    let mut pager = PagedScrollController::new(surface, &config).unwrap();
    pager.initialize();
    pager.advance(Duration::ZERO);
    pager
}

fn settle(pager: &mut PagedScrollController<HeadlessSurface>) {
    pager.advance(pager.settle_duration());
}

#[test]
fn test_index_stays_in_range_for_any_sequence() {
    let mut pager = pager(6, Vec::new());
    let targets = [-100, 3, 17, -1, 5, 6, 0, i64::MAX, i64::MIN, 2];
    for (step, target) in targets.into_iter().enumerate() {
        let motion = if step % 2 == 0 {
            Motion::Animated
        } else {
            Motion::Instant
        };
        pager.go_to_section(target, motion);
        assert!(pager.current_index() < pager.section_count());
        pager.advance(Duration::from_millis(300));
    }
}

#[test]
fn test_transition_returns_to_idle_after_settle_duration() {
    let mut pager = pager(4, Vec::new());
    assert_eq!(pager.phase(), Phase::Idle);

    assert!(pager.go_to_section(2, Motion::Animated));
    assert_eq!(pager.phase(), Phase::Transitioning);

    settle(&mut pager);
    assert_eq!(pager.phase(), Phase::Idle);
    assert_eq!(pager.current_index(), 2);
}

#[test]
fn test_requests_during_transition_are_dropped() {
    let mut pager = pager(8, Vec::new());
    pager.go_to_section(1, Motion::Animated);

    for target in [0, 5, 7] {
        assert!(!pager.go_to_section(target, Motion::Animated));
        assert_eq!(pager.current_index(), 1);
        assert_eq!(pager.phase(), Phase::Transitioning);
    }
}

#[test]
fn test_recompute_layout_is_idempotent() {
    let mut pager = pager(5, Vec::new());
    pager.go_to_section(3, Motion::Instant);

    pager.recompute_layout();
    pager.advance(Duration::ZERO);
    let first = pager.offsets().clone();
    let index = pager.current_index();

    pager.recompute_layout();
    pager.advance(Duration::ZERO);
    assert_eq!(pager.offsets(), &first);
    assert_eq!(pager.current_index(), index);
    assert_eq!(pager.surface().transform(), -3.0 * PANE_HEIGHT);
}

#[test]
fn test_recompute_picks_up_content_growth() {
    let mut pager = pager(3, Vec::new());
    pager.go_to_section(2, Motion::Instant);

    pager.surface_mut().set_pane_height(0, 1500.0);
    pager.handle_input(InputEvent::Layout(LayoutTrigger::ContentMutation));
    assert_eq!(pager.surface().transform(), 0.0, "reset before measuring");

    pager.advance(Duration::ZERO);
    assert_eq!(pager.offsets().as_slice(), &[0.0, 1500.0, 2400.0]);
    assert_eq!(pager.surface().transform(), -2400.0);
    assert_eq!(pager.surface().last_motion(), Some(Motion::Instant));
}

#[test]
fn test_failed_image_recomputes_like_loaded_image() {
    let mut pager = pager(3, Vec::new());
    let resets = pager.surface().reset_count();
    assert!(pager.handle_input(InputEvent::Layout(LayoutTrigger::ImageFailed)));
    assert!(pager.handle_input(InputEvent::Layout(LayoutTrigger::ImageLoaded)));
    assert_eq!(pager.surface().reset_count(), resets + 2);
}

#[test]
fn test_short_swipe_is_noise() {
    let mut pager = pager(5, Vec::new());
    pager.go_to_section(2, Motion::Instant);

    pager.handle_input(InputEvent::TouchStart { y: 400.0 });
    assert!(!pager.handle_input(InputEvent::TouchEnd { y: 351.0 }));
    assert_eq!(pager.current_index(), 2);
    assert_eq!(pager.phase(), Phase::Idle);
}

#[test]
fn test_tap_does_not_navigate_without_threshold() {
    let config = PagerConfig {
        swipe_threshold_px: 0.0,
        ..PagerConfig::default()
    };
    let mut pager =
        PagedScrollController::new(HeadlessSurface::uniform(5, PANE_HEIGHT), &config).unwrap();
    pager.initialize();
    pager.advance(Duration::ZERO);
    pager.go_to_section(2, Motion::Instant);

    pager.handle_input(InputEvent::TouchStart { y: 300.0 });
    assert!(!pager.handle_input(InputEvent::TouchEnd { y: 300.0 }));
    assert_eq!(pager.current_index(), 2);
    assert_eq!(pager.phase(), Phase::Idle);
}

#[test]
fn test_long_swipes_step_one_section() {
    let mut pager = pager(5, Vec::new());
    pager.go_to_section(2, Motion::Instant);

    // Finger drags the page up: content scrolls down.
    pager.handle_input(InputEvent::TouchStart { y: 400.0 });
    assert!(pager.handle_input(InputEvent::TouchEnd { y: 350.0 }));
    assert_eq!(pager.current_index(), 3);
    settle(&mut pager);

    // Finger drags the page down: content scrolls up.
    pager.handle_input(InputEvent::TouchStart { y: 100.0 });
    assert!(pager.handle_input(InputEvent::TouchEnd { y: 600.0 }));
    assert_eq!(pager.current_index(), 2);
}

#[test]
fn test_swipes_clamp_at_the_ends() {
    let mut pager = pager(2, Vec::new());
    pager.handle_input(InputEvent::TouchStart { y: 100.0 });
    pager.handle_input(InputEvent::TouchEnd { y: 400.0 });
    assert_eq!(pager.current_index(), 0);
    settle(&mut pager);

    pager.go_to_section(1, Motion::Instant);
    pager.handle_input(InputEvent::TouchStart { y: 400.0 });
    pager.handle_input(InputEvent::TouchEnd { y: 100.0 });
    assert_eq!(pager.current_index(), 1);
}

#[test]
fn test_end_and_home_keys() {
    let mut pager = pager(10, resume_names());

    pager.handle_input(InputEvent::Key(Key::End));
    assert_eq!(pager.current_index(), 9);
    assert_eq!(pager.indicator_view().label, "Section 10 (10/10)");
    settle(&mut pager);

    pager.handle_input(InputEvent::Key(Key::Home));
    assert_eq!(pager.current_index(), 0);
    assert_eq!(
        pager.surface().indicator().unwrap().label,
        "Profile (1/10)"
    );
}

#[test]
fn test_end_key_uses_registered_name() {
    let mut names = resume_names();
    names.push("Strengths and Weaknesses");
    let mut pager = pager(10, names);
    pager.handle_input(InputEvent::Key(Key::End));
    assert_eq!(
        pager.indicator_view().label,
        "Strengths and Weaknesses (10/10)"
    );
}

#[test]
fn test_second_wheel_event_inside_settle_window_is_dropped() {
    let mut pager = pager(10, Vec::new());
    pager.go_to_section(3, Motion::Instant);

    assert!(pager.handle_input(InputEvent::Wheel { delta_y: 100.0 }));
    assert_eq!(pager.current_index(), 4);

    pager.advance(Duration::from_millis(100));
    assert!(!pager.handle_input(InputEvent::Wheel { delta_y: 100.0 }));
    assert_eq!(pager.current_index(), 4);

    pager.advance(Duration::from_millis(750));
    assert_eq!(pager.phase(), Phase::Idle);
    assert!(pager.handle_input(InputEvent::Wheel { delta_y: 100.0 }));
    assert_eq!(pager.current_index(), 5);
}

#[test]
fn test_outside_click_closes_dropdown() {
    let mut pager = pager(4, Vec::new());
    pager.handle_input(InputEvent::DropdownToggle);
    assert_eq!(pager.surface().indicator().unwrap().toggle_glyph, "▲");
    assert!(pager.surface().indicator().unwrap().open);

    assert!(pager.handle_input(InputEvent::OutsideClick));
    let view = pager.surface().indicator().unwrap();
    assert!(!view.open);
    assert_eq!(view.toggle_glyph, "▼");

    assert!(!pager.handle_input(InputEvent::OutsideClick), "already closed");
}

#[test]
fn test_dropdown_selection_jumps_and_closes() {
    let mut pager = pager(6, resume_names());
    pager.handle_input(InputEvent::DropdownToggle);

    assert!(pager.handle_input(InputEvent::DropdownSelect(4)));
    assert_eq!(pager.current_index(), 4);
    assert!(!pager.is_dropdown_open());
    assert_eq!(pager.surface().transform(), -4.0 * PANE_HEIGHT);
    assert_eq!(pager.surface().last_motion(), Some(Motion::Animated));
}

#[test]
fn test_dropdown_selection_during_transition_still_closes() {
    let mut pager = pager(6, Vec::new());
    pager.handle_input(InputEvent::Key(Key::Down));
    pager.handle_input(InputEvent::DropdownToggle);

    assert!(!pager.handle_input(InputEvent::DropdownSelect(5)));
    assert_eq!(pager.current_index(), 1);
    assert!(!pager.is_dropdown_open());
}

#[test]
fn test_nav_button_clamps_target() {
    let mut pager = pager(3, Vec::new());
    assert!(pager.handle_input(InputEvent::NavButton { target: 12 }));
    assert_eq!(pager.current_index(), 2);
}

#[test]
fn test_snap_during_transition_does_not_extend_lock() {
    let mut pager = pager(5, Vec::new());
    pager.handle_input(InputEvent::Key(Key::Down));

    pager.advance(Duration::from_millis(500));
    pager.handle_input(InputEvent::Layout(LayoutTrigger::Resize));
    pager.advance(Duration::ZERO);
    assert!(pager.is_transitioning());

    // The first timer still fires 850ms after the navigation.
    pager.advance(Duration::from_millis(350));
    assert_eq!(pager.phase(), Phase::Idle);
}

#[test]
fn test_initialize_twice_is_harmless() {
    let mut pager = pager(4, Vec::new());
    pager.go_to_section(2, Motion::Instant);

    pager.initialize();
    pager.advance(Duration::ZERO);
    assert!(pager.is_initialized());
    assert_eq!(pager.current_index(), 2);
    assert_eq!(pager.surface().transform(), -2.0 * PANE_HEIGHT);
}
