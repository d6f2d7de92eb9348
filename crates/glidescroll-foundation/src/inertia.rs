//! Post-release inertia driven by the frame clock.

use glidescroll_animation::{FloatDecayAnimationSpec, FrictionDecaySpec};
use glidescroll_core::{FrameClock, PendingFrame};
use std::cell::RefCell;
use std::rc::Rc;

/// Unconsumed delta (in pixels) that counts as hitting a scroll bound.
const BOUNDARY_EPSILON: f32 = 0.001;

/// One inertia run, from release until rest, bound or cancel.
struct InertiaRun {
    /// Pointer velocity still to apply, pixels per frame.
    velocity: f32,
    decay_spec: FrictionDecaySpec,
    frames: u32,
    running: bool,
    next_frame: Option<PendingFrame>,
}

type RunSlot = Rc<RefCell<Option<InertiaRun>>>;

/// Why a run stopped on its own.
#[derive(Debug, Clone, Copy)]
enum StopReason {
    Bound,
    Rest,
}

/// Applies one frame of the run in `slot`.
///
/// Returns `None` when the run was cancelled before this frame, otherwise
/// whether another frame is needed.
fn step_run(slot: &RunSlot, on_scroll: &dyn Fn(f32) -> f32) -> Option<bool> {
    let velocity = slot
        .borrow()
        .as_ref()
        .filter(|run| run.running)
        .map(|run| run.velocity)?;

    // Scroll moves against the pointer velocity.
    let delta = -velocity;
    let consumed = on_scroll(delta);

    let mut guard = slot.borrow_mut();
    let run = guard.as_mut()?;
    run.velocity = run.decay_spec.step(velocity);
    run.frames += 1;

    let stop = if (delta - consumed).abs() > BOUNDARY_EPSILON {
        Some(StopReason::Bound)
    } else if !run.decay_spec.is_moving(run.velocity) {
        Some(StopReason::Rest)
    } else {
        None
    };
    match stop {
        Some(reason) => {
            run.running = false;
            run.next_frame = None;
            log::trace!("inertia stopped after {} frames ({reason:?})", run.frames);
            Some(false)
        }
        None => Some(true),
    }
}

/// Requests the next frame for the run in `slot`; each frame re-requests
/// until the run stops.
fn request_frame<F, G>(slot: RunSlot, clock: FrameClock, on_scroll: F, on_end: G)
where
    F: Fn(f32) -> f32 + 'static,
    G: FnOnce() + 'static,
{
    let frame_slot = slot.clone();
    let frame_clock = clock.clone();
    let next_frame = clock.on_next_frame(move |_frame_time_nanos| {
        match step_run(&frame_slot, &on_scroll) {
            Some(true) => request_frame(frame_slot, frame_clock, on_scroll, on_end),
            Some(false) => on_end(),
            None => {}
        }
    });

    if let Some(run) = slot.borrow_mut().as_mut() {
        run.next_frame = Some(next_frame);
    }
}

/// Drives post-release inertia on a scroll target.
///
/// Every frame the current velocity is handed to the target as a scroll
/// delta (negated, since dragging right scrolls left) and then decayed by
/// friction. One run at a time: starting again replaces the previous run.
#[derive(Clone)]
pub struct InertiaAnimation {
    slot: RunSlot,
    frame_clock: FrameClock,
}

impl InertiaAnimation {
    pub fn new(frame_clock: FrameClock) -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            frame_clock,
        }
    }

    /// Starts inertia with the given release velocity.
    ///
    /// * `on_scroll` - invoked each frame with the scroll delta; returns the
    ///   amount the target actually consumed.
    /// * `on_end` - invoked once when the run stops on its own. A cancelled
    ///   run never calls it.
    pub fn start<F, G>(&self, velocity: f32, decay_spec: FrictionDecaySpec, on_scroll: F, on_end: G)
    where
        F: Fn(f32) -> f32 + 'static,
        G: FnOnce() + 'static,
    {
        self.cancel();
        log::trace!(
            "inertia started at {velocity:.2} px/frame, ~{} frames",
            decay_spec.duration_frames(velocity)
        );

        *self.slot.borrow_mut() = Some(InertiaRun {
            velocity,
            decay_spec,
            frames: 0,
            running: true,
            next_frame: None,
        });
        request_frame(self.slot.clone(), self.frame_clock.clone(), on_scroll, on_end);
    }

    /// Stops the run and withdraws its pending frame. Safe to call when
    /// nothing is running.
    pub fn cancel(&self) {
        let run = self.slot.borrow_mut().take();
        drop(run);
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().as_ref().is_some_and(|run| run.running)
    }

    /// Velocity of the running animation, or 0.0 when idle.
    pub fn velocity(&self) -> f32 {
        self.slot
            .borrow()
            .as_ref()
            .filter(|run| run.running)
            .map_or(0.0, |run| run.velocity)
    }

    /// Frames stepped by the current (or last finished) run.
    pub fn frames(&self) -> u32 {
        self.slot.borrow().as_ref().map_or(0, |run| run.frames)
    }
}

#[cfg(test)]
#[path = "tests/inertia_tests.rs"]
mod tests;
