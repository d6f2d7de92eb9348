//! End-to-end gesture scenarios driven through the robot harness.

use glidescroll_animation::{FloatDecayAnimationSpec, FrictionDecaySpec};
use glidescroll_foundation::{ScrollContainer, SliderConfig, SliderPhase};
use glidescroll_testing::prelude::*;
use glidescroll_testing::robot_assertions::{
    assert_approx_eq, assert_at_rest, assert_scroll_in_bounds,
};

#[test]
fn drag_inside_bounds_scrolls_by_walk() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));

    robot.press(500.0);
    robot.move_to(300.0);

    assert_eq!(robot.scroll_left(), 200.0);
    assert_eq!(robot.container().translate_x(), 0.0);
    assert!(robot.container().has_class("active"));
}

#[test]
fn offset_container_walks_from_offset_adjusted_start() {
    let container = FakeContainer::new(2000.0, 1000.0)
        .with_scroll_left(500.0)
        .with_offset_left(120.0);
    let mut robot = SliderRobot::new(container);

    robot.press(500.0);
    robot.move_to(450.0);

    assert_eq!(robot.scroll_left(), 430.0);
    assert_eq!(robot.container().translate_x(), 0.0);
}

#[test]
fn drag_past_max_bounces_and_snaps_back_without_inertia() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0).with_scroll_left(1000.0));

    robot.press(400.0);
    robot.move_to(350.0);

    assert_eq!(robot.scroll_left(), 1000.0);
    assert_approx_eq(
        robot.container().translate_x(),
        -16.67,
        0.01,
        "damped overscroll",
    );

    robot.release();
    assert_eq!(robot.phase(), SliderPhase::SnappingBack);
    assert_eq!(robot.container().translate_x(), 0.0);
    assert!(!robot.has_pending_frames(), "snap back never starts inertia");

    robot.finish_transition();
    assert_eq!(robot.phase(), SliderPhase::Idle);
    assert_at_rest(robot.container(), "after transition");
}

#[test]
fn drag_past_start_pushes_content_right() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0).with_scroll_left(30.0));

    robot.press(200.0);
    robot.move_to(290.0); // tentative -60

    assert_eq!(robot.scroll_left(), 0.0);
    assert_approx_eq(robot.container().translate_x(), 20.0, 1e-4, "left bounce");
}

#[test]
fn returning_inside_bounds_clears_translate() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));

    robot.press(200.0);
    robot.move_to(260.0);
    assert!(robot.container().translate_x() > 0.0);
    robot.move_to(150.0);

    assert_eq!(robot.container().translate_x(), 0.0);
    assert_eq!(robot.scroll_left(), 50.0);
    robot.release();
    assert_ne!(robot.phase(), SliderPhase::SnappingBack);
}

#[test]
fn release_velocity_threshold_gates_inertia() {
    // |velocity| = 0.8 * 1.25 = 1.0 is not above the threshold.
    let mut robot = SliderRobot::new(FakeContainer::new(4000.0, 1000.0).with_scroll_left(1000.0));
    robot.drag(500.0, 498.75, 1);
    assert_eq!(robot.phase(), SliderPhase::Idle);
    assert!(!robot.has_pending_frames());

    let mut robot = SliderRobot::new(FakeContainer::new(4000.0, 1000.0).with_scroll_left(1000.0));
    robot.drag(500.0, 498.0, 1);
    assert_eq!(robot.phase(), SliderPhase::InertiaScrolling);
    assert!(robot.has_pending_frames());
}

#[test]
fn inertia_velocity_shrinks_by_friction_every_frame() {
    let mut robot = SliderRobot::new(FakeContainer::new(20_000.0, 1000.0).with_scroll_left(5000.0));
    robot.drag(800.0, 500.0, 6); // 50 px per move

    let mut previous = robot.slider().velocity();
    let mut steps = 0;
    while robot.has_pending_frames() {
        robot.advance_frame();
        steps += 1;
        let current = robot.slider().velocity();
        if robot.slider().is_inertia_running() {
            assert_approx_eq(current, previous * 0.95, 1e-3, "friction step");
            assert!(current.abs() < previous.abs());
        }
        previous = current;
        assert!(steps < 500, "inertia must settle");
    }

    let released = -0.8 * 50.0 * (1.0 - 0.2f32.powi(6)) / 0.8;
    let expected_steps = FrictionDecaySpec::default().duration_frames(released);
    assert_eq!(steps, expected_steps);
    assert_eq!(robot.phase(), SliderPhase::Idle);
}

#[test]
fn inertia_pins_at_max_and_stops() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0).with_scroll_left(900.0));
    robot.drag(500.0, 450.0, 2);

    let frames = robot.run_until_idle(1_000);
    assert_eq!(robot.scroll_left(), 1000.0);
    assert!(frames < 20, "stopped at the bound, not at rest ({frames} frames)");
    assert_eq!(robot.phase(), SliderPhase::Idle);
}

#[test]
fn inertia_pins_at_zero_and_stops() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0).with_scroll_left(100.0));
    robot.drag(500.0, 550.0, 2);

    robot.run_until_idle(1_000);
    assert_eq!(robot.scroll_left(), 0.0);
    assert_eq!(robot.phase(), SliderPhase::Idle);
}

#[test]
fn press_during_inertia_freezes_scroll() {
    let mut robot = SliderRobot::new(FakeContainer::new(10_000.0, 1000.0).with_scroll_left(2000.0));
    robot.drag(600.0, 400.0, 4);
    robot.advance_frame();
    robot.advance_frame();

    robot.press(400.0);
    let frozen = robot.scroll_left();
    for _ in 0..5 {
        robot.advance_frame();
    }
    assert_eq!(robot.scroll_left(), frozen);
    assert_eq!(robot.phase(), SliderPhase::Dragging);
}

#[test]
fn link_click_suppressed_iff_pointer_moved() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));

    robot.press(300.0);
    robot.release();
    assert!(!robot.click(true), "plain click navigates");

    robot.press(300.0);
    robot.move_to(300.0);
    robot.release();
    assert!(robot.click(true), "zero-distance move still counts as drag");

    robot.move_to(200.0);
    robot.press(300.0);
    robot.release();
    assert!(!robot.click(true), "moves outside a drag do not count");

    assert!(robot.native_drag_start(true));
    assert!(!robot.native_drag_start(false));
}

#[test]
fn leaving_the_container_ends_the_drag() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0).with_scroll_left(500.0));
    robot.press(500.0);
    robot.move_to(499.5);
    robot.leave();

    assert_eq!(robot.phase(), SliderPhase::Idle);
    assert!(!robot.container().has_class("active"));
    assert!(!robot.move_to(100.0), "moves after leave are ignored");
    assert_eq!(robot.scroll_left(), 500.5);
}

#[test]
fn independent_sliders_do_not_interact() {
    let mut first = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));
    let mut second = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));

    first.press(500.0);
    first.move_to(400.0);
    assert_eq!(second.scroll_left(), 0.0);
    assert!(!second.container().has_class("active"));
    assert!(!second.move_to(300.0));
}

#[test]
fn content_narrower_than_viewport_only_bounces() {
    let mut robot = SliderRobot::new(FakeContainer::new(600.0, 1000.0));
    robot.press(500.0);
    robot.move_to(440.0);

    assert_eq!(robot.scroll_left(), 0.0);
    assert_approx_eq(robot.container().translate_x(), -20.0, 1e-4, "end bounce");
    assert_scroll_in_bounds(robot.container(), "narrow content");
}

#[test]
fn content_shrinking_mid_inertia_stays_in_bounds() {
    let mut robot = SliderRobot::new(FakeContainer::new(5000.0, 1000.0).with_scroll_left(3000.0));
    robot.drag(600.0, 400.0, 4);
    robot.advance_frame();
    robot.container().resize_content(3200.0);

    robot.run_until_idle(1_000);
    assert_scroll_in_bounds(robot.container(), "after shrink");
    assert_eq!(robot.scroll_left(), robot.container().max_scroll_left());
}

#[test]
fn softer_friction_coasts_further() {
    let stock = {
        let mut robot = SliderRobot::new(FakeContainer::new(50_000.0, 1000.0).with_scroll_left(10_000.0));
        robot.drag(600.0, 500.0, 5);
        robot.run_until_idle(5_000);
        robot.scroll_left()
    };
    let slippery = {
        let config = SliderConfig::default().with_friction(0.98);
        let mut robot = SliderRobot::with_config(
            FakeContainer::new(50_000.0, 1000.0).with_scroll_left(10_000.0),
            config,
        );
        robot.drag(600.0, 500.0, 5);
        robot.run_until_idle(5_000);
        robot.scroll_left()
    };
    assert!(slippery > stock);
}
