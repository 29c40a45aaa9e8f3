//! Assertion utilities for robot testing

use slidenav::{MenuState, SlidingRootNav};
use slidenav_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the menu rests in `expected` with the matching progress.
pub fn assert_resting(nav: &SlidingRootNav, expected: MenuState) {
    assert!(expected.is_idle(), "{:?} is not a resting state", expected);
    assert_eq!(nav.menu_state(), expected, "menu state");
    assert!(!nav.is_settling(), "menu is still settling");
    if let Some(progress) = expected.boundary_progress() {
        assert_approx_eq(nav.drag_progress(), progress, 1e-6, "drag progress");
    }
}

/// Assert that recorded progress values never leave [0, 1].
pub fn assert_progress_in_range(values: &[f32]) {
    for (index, value) in values.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(value),
            "progress #{} out of range: {}",
            index,
            value
        );
    }
}
