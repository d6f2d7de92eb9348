//! Robot testing harness for sliders.
//!
//! Drives a [`DraggableSlider`] over a [`FakeContainer`] the way a user and
//! a browser would: pointer events go through `dispatch`, frames are pumped
//! by hand with a fixed 60 FPS timestamp.
//!
//! # Example
//!
//! ```
//! use glidescroll_testing::{FakeContainer, SliderRobot};
//!
//! let mut robot = SliderRobot::new(FakeContainer::new(2000.0, 1000.0));
//! robot.drag(500.0, 300.0, 4);
//! robot.run_until_idle(1_000);
//! assert!(robot.scroll_left() >= 200.0);
//! ```

use crate::fake_container::FakeContainer;
use glidescroll_core::{FrameRuntime, FrameScheduler};
use glidescroll_foundation::{
    DraggableSlider, ScrollContainer, SliderConfig, SliderEvent, SliderPhase,
};
use std::cell::Cell;
use std::rc::Rc;

/// Nanoseconds per frame at 60 FPS.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Scheduler that only counts frame requests; the robot delivers frames.
#[derive(Default, Debug)]
pub struct ManualScheduler {
    requests: Cell<usize>,
}

impl ManualScheduler {
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

pub struct SliderRobot {
    runtime: FrameRuntime,
    scheduler: Rc<ManualScheduler>,
    slider: DraggableSlider<FakeContainer>,
    pointer_x: f32,
    frame_time: u64,
    frames: u32,
}

impl SliderRobot {
    pub fn new(container: FakeContainer) -> Self {
        Self::with_config(container, SliderConfig::default())
    }

    pub fn with_config(container: FakeContainer, config: SliderConfig) -> Self {
        let scheduler = Rc::new(ManualScheduler::default());
        let runtime = FrameRuntime::new(scheduler.clone());
        let slider = DraggableSlider::with_config(container, runtime.frame_clock(), config);
        Self {
            runtime,
            scheduler,
            slider,
            pointer_x: 0.0,
            frame_time: 0,
            frames: 0,
        }
    }

    pub fn slider(&self) -> &DraggableSlider<FakeContainer> {
        &self.slider
    }

    pub fn container(&self) -> &FakeContainer {
        self.slider.container()
    }

    pub fn scheduler(&self) -> &ManualScheduler {
        &self.scheduler
    }

    pub fn phase(&self) -> SliderPhase {
        self.slider.phase()
    }

    pub fn scroll_left(&self) -> f32 {
        self.container().scroll_left()
    }

    /// Frames delivered so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn press(&mut self, x: f32) {
        self.pointer_x = x;
        self.slider.dispatch(SliderEvent::down(x));
    }

    /// Returns whether the move's default action would be prevented.
    pub fn move_to(&mut self, x: f32) -> bool {
        self.pointer_x = x;
        self.slider.dispatch(SliderEvent::moved(x))
    }

    pub fn release(&mut self) {
        self.slider.dispatch(SliderEvent::up(self.pointer_x));
    }

    pub fn leave(&mut self) {
        self.slider.dispatch(SliderEvent::leave(self.pointer_x));
    }

    /// Press at `from`, move to `to` in `steps` equal increments, release.
    pub fn drag(&mut self, from: f32, to: f32, steps: u32) {
        self.press(from);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from + (to - from) * t);
        }
        self.release();
    }

    /// Returns `true` if the click would be prevented.
    pub fn click(&mut self, on_link: bool) -> bool {
        self.slider.dispatch(SliderEvent::Click { on_link })
    }

    pub fn native_drag_start(&mut self, on_link: bool) -> bool {
        self.slider.dispatch(SliderEvent::DragStart { on_link })
    }

    /// Simulates the browser finishing the snap-back transition.
    pub fn finish_transition(&mut self) {
        self.slider.dispatch(SliderEvent::TransitionEnd);
    }

    /// Delivers one frame, whether or not anything asked for it.
    pub fn advance_frame(&mut self) {
        self.frame_time += FRAME_NANOS;
        self.frames += 1;
        self.runtime.drain_frame_callbacks(self.frame_time);
    }

    /// Delivers frames while callbacks are pending, up to `max_frames`.
    /// Returns how many were delivered.
    pub fn run_until_idle(&mut self, max_frames: u32) -> u32 {
        let mut delivered = 0;
        while self.runtime.has_frame_callbacks() && delivered < max_frames {
            self.advance_frame();
            delivered += 1;
        }
        delivered
    }

    pub fn has_pending_frames(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
