//! Tunables for a [`DraggableSlider`](crate::DraggableSlider).

use crate::gesture_constants::{
    ACTIVE_CLASS, DEFAULT_FRICTION, FLING_REST_VELOCITY, FLING_START_VELOCITY,
    OVERSCROLL_DAMPING, SNAPPING_CLASS, VELOCITY_SMOOTHING,
};
use glidescroll_animation::FrictionDecaySpec;

/// Configuration for one slider instance.
///
/// `Default` reproduces the stock carousel feel; the `with_*` methods
/// adjust individual values.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Per-frame velocity decay during inertia.
    pub friction: f32,
    /// Divisor for drag distance past a scroll bound.
    pub overscroll_damping: f32,
    /// Weight of the newest delta in the velocity estimate (0..=1).
    pub velocity_smoothing: f32,
    /// Release speed that must be exceeded to start inertia.
    pub fling_threshold: f32,
    /// Speed at or below which inertia stops.
    pub rest_threshold: f32,
    pub active_class: String,
    pub snapping_class: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            overscroll_damping: OVERSCROLL_DAMPING,
            velocity_smoothing: VELOCITY_SMOOTHING,
            fling_threshold: FLING_START_VELOCITY,
            rest_threshold: FLING_REST_VELOCITY,
            active_class: ACTIVE_CLASS.into(),
            snapping_class: SNAPPING_CLASS.into(),
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Damping below 1.0 would amplify the overshoot, so it is floored there.
    pub fn with_overscroll_damping(mut self, damping: f32) -> Self {
        self.overscroll_damping = damping.max(1.0);
        self
    }

    pub fn with_velocity_smoothing(mut self, smoothing: f32) -> Self {
        self.velocity_smoothing = smoothing.clamp(0.0, 1.0);
        self
    }

    pub fn with_fling_threshold(mut self, threshold: f32) -> Self {
        self.fling_threshold = threshold.max(0.0);
        self
    }

    pub fn with_rest_threshold(mut self, threshold: f32) -> Self {
        self.rest_threshold = threshold.max(0.0);
        self
    }

    pub fn with_classes(mut self, active: impl Into<String>, snapping: impl Into<String>) -> Self {
        self.active_class = active.into();
        self.snapping_class = snapping.into();
        self
    }

    pub fn decay_spec(&self) -> FrictionDecaySpec {
        FrictionDecaySpec::new(self.friction, self.rest_threshold)
    }
}
