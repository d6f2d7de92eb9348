//! Platform abstraction for frame scheduling.
//!
//! The runtime never drives frames itself. It asks the host to schedule
//! one (a `requestAnimationFrame` on the web, a manual tick in tests) and
//! the host answers by calling [`RuntimeHandle::drain_frame_callbacks`].
//!
//! [`RuntimeHandle::drain_frame_callbacks`]: crate::RuntimeHandle::drain_frame_callbacks

/// Schedules frames on behalf of the runtime.
///
/// Everything here lives on the UI thread, so implementations are free to
/// hold `Rc` state and are not required to be `Send` or `Sync`.
pub trait FrameScheduler {
    /// Request that the host deliver a new frame.
    fn schedule_frame(&self);
}

/// Scheduler that ignores frame requests.
///
/// Useful when the host pumps frames on its own cadence.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoopScheduler;

impl FrameScheduler for NoopScheduler {
    fn schedule_frame(&self) {}
}
