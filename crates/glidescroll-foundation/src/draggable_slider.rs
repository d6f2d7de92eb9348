//! Drag-to-scroll controller with inertia and overscroll bounce.
//!
//! Lifecycle of one gesture:
//!
//! ```text
//! Idle ──down──▶ Dragging ──up/leave──▶ SnappingBack     (overscroll ≠ 0)
//!                                   ├──▶ InertiaScrolling (|velocity| > 1)
//!                                   └──▶ Idle
//! SnappingBack ──transition end──▶ Idle
//! InertiaScrolling ──rest / bound──▶ Idle
//! ```
//!
//! A new `down` wins from any phase: it cancels inertia and drops the
//! snapping class before the drag starts.

use crate::config::SliderConfig;
use crate::inertia::InertiaAnimation;
use crate::input::{PointerEventKind, SliderEvent};
use crate::overscroll::resolve_drag_scroll;
use crate::scroll_container::ScrollContainer;
use crate::velocity_tracker::SmoothedVelocity;
use glidescroll_animation::FrictionDecaySpec;
use glidescroll_core::FrameClock;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SliderPhase {
    #[default]
    Idle,
    Dragging,
    SnappingBack,
    InertiaScrolling,
}

/// Per-gesture state, rewritten on every `begin_drag`.
#[derive(Debug, Default)]
struct DragState {
    phase: SliderPhase,
    /// Pointer position at drag start minus the container's `offset_left`.
    drag_start_x: f32,
    scroll_start_left: f32,
    has_dragged: bool,
    velocity: SmoothedVelocity,
    /// Translate currently applied for the rubber band.
    overscroll: f32,
}

struct SliderInner<C> {
    container: C,
    config: SliderConfig,
    decay_spec: FrictionDecaySpec,
    state: RefCell<DragState>,
    inertia: InertiaAnimation,
}

impl<C: ScrollContainer> SliderInner<C> {
    /// Applies an inertia delta, pinning at the bounds. Returns the part of
    /// `delta` the container took.
    fn scroll_by(&self, delta: f32) -> f32 {
        let current = self.container.scroll_left();
        let target = (current + delta).clamp(0.0, self.container.max_scroll_left());
        self.container.set_scroll_left(target);
        target - current
    }

    fn set_phase(&self, state: &mut DragState, phase: SliderPhase) {
        if state.phase != phase {
            log::trace!("slider phase {:?} -> {:?}", state.phase, phase);
            state.phase = phase;
        }
    }
}

impl<C> Drop for SliderInner<C> {
    fn drop(&mut self) {
        self.inertia.cancel();
    }
}

/// Drag-to-scroll behavior bound to one container.
///
/// Cloning yields another handle to the same controller, which is how
/// platform event listeners share it.
pub struct DraggableSlider<C> {
    inner: Rc<SliderInner<C>>,
}

impl<C> Clone for DraggableSlider<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: ScrollContainer + 'static> DraggableSlider<C> {
    pub fn new(container: C, frame_clock: FrameClock) -> Self {
        Self::with_config(container, frame_clock, SliderConfig::default())
    }

    pub fn with_config(container: C, frame_clock: FrameClock, config: SliderConfig) -> Self {
        let state = DragState {
            velocity: SmoothedVelocity::new(config.velocity_smoothing),
            ..DragState::default()
        };
        Self {
            inner: Rc::new(SliderInner {
                container,
                decay_spec: config.decay_spec(),
                config,
                state: RefCell::new(state),
                inertia: InertiaAnimation::new(frame_clock),
            }),
        }
    }

    pub fn container(&self) -> &C {
        &self.inner.container
    }

    pub fn config(&self) -> &SliderConfig {
        &self.inner.config
    }

    pub fn phase(&self) -> SliderPhase {
        self.inner.state.borrow().phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == SliderPhase::Dragging
    }

    /// Whether the pointer moved during the current or most recent drag.
    pub fn has_dragged(&self) -> bool {
        self.inner.state.borrow().has_dragged
    }

    /// Live inertia velocity while coasting, otherwise the drag estimate.
    pub fn velocity(&self) -> f32 {
        if self.inner.inertia.is_running() {
            self.inner.inertia.velocity()
        } else {
            self.inner.state.borrow().velocity.velocity()
        }
    }

    pub fn overscroll(&self) -> f32 {
        self.inner.state.borrow().overscroll
    }

    pub fn is_inertia_running(&self) -> bool {
        self.inner.inertia.is_running()
    }

    /// Routes a host event. Returns `true` when the host should prevent the
    /// event's default action.
    pub fn dispatch(&self, event: SliderEvent) -> bool {
        match event {
            SliderEvent::Pointer { kind, page_x } => match kind {
                PointerEventKind::Down => {
                    self.begin_drag(page_x);
                    false
                }
                PointerEventKind::Move => self.update_drag(page_x),
                PointerEventKind::Up | PointerEventKind::Leave => {
                    self.end_drag();
                    false
                }
            },
            SliderEvent::Click { on_link } => self.should_suppress_click(on_link),
            SliderEvent::DragStart { on_link } => self.should_suppress_drag_start(on_link),
            SliderEvent::TransitionEnd => {
                self.transition_end();
                false
            }
        }
    }

    pub fn begin_drag(&self, pointer_x: f32) {
        let inner = &self.inner;
        let container = &inner.container;
        inner.inertia.cancel();
        container.set_class(&inner.config.active_class, true);
        container.set_class(&inner.config.snapping_class, false);

        let mut state = inner.state.borrow_mut();
        inner.set_phase(&mut state, SliderPhase::Dragging);
        state.has_dragged = false;
        state.drag_start_x = pointer_x - container.offset_left();
        state.scroll_start_left = container.scroll_left();
        state.velocity.reset(pointer_x);
    }

    /// Follows the pointer. Returns `false` (and does nothing) unless a drag
    /// is in progress.
    pub fn update_drag(&self, pointer_x: f32) -> bool {
        let inner = &self.inner;
        let container = &inner.container;
        let mut state = inner.state.borrow_mut();
        if state.phase != SliderPhase::Dragging {
            return false;
        }
        state.has_dragged = true;

        let walk = pointer_x - state.drag_start_x;
        let resolved = resolve_drag_scroll(
            state.scroll_start_left - walk,
            container.max_scroll_left(),
            inner.config.overscroll_damping,
        );
        container.set_scroll_left(resolved.scroll_left);
        container.set_translate_x(resolved.overscroll);
        state.overscroll = resolved.overscroll;

        state.velocity.add_position(pointer_x);
        true
    }

    pub fn end_drag(&self) {
        let velocity = {
            let inner = &self.inner;
            let container = &inner.container;
            let mut state = inner.state.borrow_mut();
            if state.phase != SliderPhase::Dragging {
                return;
            }
            container.set_class(&inner.config.active_class, false);

            if state.overscroll != 0.0 {
                // The stylesheet transitions the transform back; the
                // transition end event clears the class.
                container.set_class(&inner.config.snapping_class, true);
                container.set_translate_x(0.0);
                state.overscroll = 0.0;
                inner.set_phase(&mut state, SliderPhase::SnappingBack);
                return;
            }

            let velocity = state.velocity.velocity();
            if velocity.abs() <= inner.config.fling_threshold {
                inner.set_phase(&mut state, SliderPhase::Idle);
                return;
            }
            inner.set_phase(&mut state, SliderPhase::InertiaScrolling);
            velocity
        };
        self.start_inertia(velocity);
    }

    /// Snap-back finished: drop the snapping class.
    pub fn transition_end(&self) {
        let inner = &self.inner;
        inner
            .container
            .set_class(&inner.config.snapping_class, false);
        let mut state = inner.state.borrow_mut();
        if state.phase == SliderPhase::SnappingBack {
            inner.set_phase(&mut state, SliderPhase::Idle);
        }
    }

    /// A click landing on a link right after a drag is swallowed so the
    /// gesture does not navigate.
    pub fn should_suppress_click(&self, on_link: bool) -> bool {
        on_link && self.has_dragged()
    }

    /// Native link dragging would steal the gesture, so it is always
    /// suppressed.
    pub fn should_suppress_drag_start(&self, on_link: bool) -> bool {
        on_link
    }

    /// Returns the container to rest: cancels inertia, drops both classes
    /// and any overscroll translate.
    pub fn detach(&self) {
        let inner = &self.inner;
        let container = &inner.container;
        inner.inertia.cancel();
        container.set_class(&inner.config.active_class, false);
        container.set_class(&inner.config.snapping_class, false);

        let mut state = inner.state.borrow_mut();
        if state.overscroll != 0.0 {
            container.set_translate_x(0.0);
            state.overscroll = 0.0;
        }
        inner.set_phase(&mut state, SliderPhase::Idle);
    }

    fn start_inertia(&self, velocity: f32) {
        let for_scroll: Weak<SliderInner<C>> = Rc::downgrade(&self.inner);
        let for_end = for_scroll.clone();
        self.inner.inertia.start(
            velocity,
            self.inner.decay_spec,
            move |delta| {
                for_scroll
                    .upgrade()
                    .map_or(0.0, |inner| inner.scroll_by(delta))
            },
            move || {
                if let Some(inner) = for_end.upgrade() {
                    let mut state = inner.state.borrow_mut();
                    if state.phase == SliderPhase::InertiaScrolling {
                        inner.set_phase(&mut state, SliderPhase::Idle);
                    }
                }
            },
        );
    }
}

#[cfg(test)]
#[path = "tests/draggable_slider_tests.rs"]
mod tests;
