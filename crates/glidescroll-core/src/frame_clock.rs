use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Requests one-shot callbacks on the next frame delivered to a
/// [`FrameRuntime`](crate::FrameRuntime).
///
/// Animations re-request from inside their callback to keep running.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub(crate) fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// `false` once the owning runtime is gone; requests then never fire.
    pub fn is_attached(&self) -> bool {
        self.runtime.is_alive()
    }

    /// Runs `callback` with the frame time in nanoseconds.
    pub fn on_next_frame(&self, callback: impl FnOnce(u64) + 'static) -> PendingFrame {
        let id = self.runtime.register_frame_callback(callback);
        if id.is_none() {
            log::trace!("frame requested from a detached clock");
        }
        PendingFrame {
            runtime: self.runtime.clone(),
            id,
        }
    }

    /// Like [`on_next_frame`](Self::on_next_frame) with the time in whole
    /// milliseconds.
    pub fn on_next_frame_millis(&self, callback: impl FnOnce(u64) + 'static) -> PendingFrame {
        self.on_next_frame(move |nanos| callback(nanos / 1_000_000))
    }
}

/// A requested frame callback.
///
/// Dropping it withdraws the request unless the callback already ran.
#[must_use = "dropping a PendingFrame withdraws the request"]
pub struct PendingFrame {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl PendingFrame {
    /// `None` when the request was made after the runtime shut down.
    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    /// Whether the callback is still queued.
    pub fn is_pending(&self) -> bool {
        self.id
            .is_some_and(|id| self.runtime.is_frame_callback_queued(id))
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PendingFrame {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
