//! Assertion utilities for robot testing

use crate::fake_container::FakeContainer;
use glidescroll_foundation::ScrollContainer;

/// Assert that a value is within an expected range.
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

/// Assert that the container's scroll offset lies in `[0, max_scroll]`.
pub fn assert_scroll_in_bounds(container: &FakeContainer, msg: &str) {
    let scroll = container.scroll_left();
    let max = container.max_scroll_left();
    assert!(
        (0.0..=max).contains(&scroll),
        "{}: scroll {} outside [0, {}]",
        msg,
        scroll,
        max
    );
}

/// Assert the container is at rest: no classes from the gesture and no
/// overscroll translate.
pub fn assert_at_rest(container: &FakeContainer, msg: &str) {
    assert!(
        container.classes().is_empty(),
        "{}: leftover classes {:?}",
        msg,
        container.classes()
    );
    assert_eq!(container.translate_x(), 0.0, "{}: translate not reset", msg);
}
