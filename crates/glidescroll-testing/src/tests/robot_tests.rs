use super::*;
use crate::robot_assertions::{assert_approx_eq, assert_at_rest, assert_scroll_in_bounds};

#[test]
fn drag_requests_no_frames_until_release() {
    let mut robot = SliderRobot::new(FakeContainer::new(3000.0, 1000.0).with_scroll_left(500.0));

    robot.press(600.0);
    robot.move_to(560.0);
    robot.move_to(520.0);
    assert_eq!(robot.scheduler().requests(), 0);
    assert!(!robot.has_pending_frames());

    robot.release();
    assert_eq!(robot.phase(), SliderPhase::InertiaScrolling);
    assert_eq!(robot.scheduler().requests(), 1);
}

#[test]
fn each_inertia_step_requests_the_next_frame() {
    let mut robot = SliderRobot::new(FakeContainer::new(10_000.0, 1000.0).with_scroll_left(100.0));
    robot.drag(600.0, 500.0, 5);

    let frames = robot.run_until_idle(1_000);
    assert!(frames > 1);
    assert_eq!(robot.scheduler().requests() as u32, frames);
    assert_eq!(robot.phase(), SliderPhase::Idle);
    assert_scroll_in_bounds(robot.container(), "after inertia");
}

#[test]
fn extra_frames_after_idle_do_nothing() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0).with_scroll_left(500.0));
    robot.drag(500.0, 499.5, 1);
    let scroll = robot.scroll_left();

    robot.advance_frame();
    robot.advance_frame();
    assert_eq!(robot.scroll_left(), scroll);
    assert_eq!(robot.frames(), 2);
}

#[test]
fn snap_back_round_trip_leaves_container_clean() {
    let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));
    robot.drag(100.0, 160.0, 3);

    assert_eq!(robot.phase(), SliderPhase::SnappingBack);
    assert_eq!(robot.container().classes(), vec!["snapping".to_string()]);
    assert_eq!(robot.container().transform_css(), "translateX(0px)");

    robot.finish_transition();
    assert_at_rest(robot.container(), "after snap back");
    assert_approx_eq(robot.scroll_left(), 0.0, 0.0, "scroll untouched at start edge");
}
