use glidescroll_core::{FrameScheduler, RuntimeHandle};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Delivers runtime frames through `requestAnimationFrame`.
///
/// At most one animation frame is requested at a time; the frame callback
/// drains the runtime with the browser's timestamp.
pub struct AnimationFrameScheduler {
    inner: Rc<SchedulerInner>,
}

struct SchedulerInner {
    window: Window,
    runtime: RefCell<Option<RuntimeHandle>>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        let inner = Rc::new(SchedulerInner {
            window,
            runtime: RefCell::new(None),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<SchedulerInner> = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            let runtime = inner.runtime.borrow().clone();
            if let Some(runtime) = runtime {
                runtime.drain_frame_callbacks(millis_to_nanos(timestamp_ms));
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);

        Self { inner }
    }

    /// Connects the scheduler to the runtime whose frames it delivers.
    pub fn bind(&self, runtime: RuntimeHandle) {
        *self.inner.runtime.borrow_mut() = Some(runtime);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule_frame(&self) {
        if self.inner.pending.get().is_some() {
            return;
        }
        let callback = self.inner.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .inner
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.inner.pending.set(Some(id)),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

impl Drop for SchedulerInner {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::error!("cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}

/// `requestAnimationFrame` timestamps are fractional milliseconds.
pub(crate) fn millis_to_nanos(timestamp_ms: f64) -> u64 {
    if timestamp_ms.is_finite() && timestamp_ms > 0.0 {
        (timestamp_ms * 1_000_000.0) as u64
    } else {
        0
    }
}
