//! Frame-stepped decay animation for inertial scrolling.
//!
//! Velocity is measured in pixels per frame and decays by a constant
//! multiplicative friction every frame, the classic "coast to a stop"
//! carousel feel. Time is counted in frames rather than nanoseconds because
//! the inertia loop advances exactly one step per delivered frame.

/// Largest friction accepted; at 1.0 the animation would never settle.
const MAX_FRICTION: f32 = 0.999;

/// Smallest rest threshold accepted. A zero threshold never settles because
/// subnormal velocities stop shrinking under multiplication.
const MIN_REST_THRESHOLD: f32 = 1e-3;

/// Trait for decay animation specifications.
///
/// A decay animation has no fixed target: it starts with a velocity and
/// decelerates until the velocity falls to the rest threshold.
pub trait FloatDecayAnimationSpec {
    /// Velocity at or below which the animation is considered finished.
    fn abs_velocity_threshold(&self) -> f32;

    /// Position after `frames` steps, each step moving by the velocity held
    /// at the start of that step.
    fn value_after_frames(&self, frames: u32, initial_value: f32, initial_velocity: f32) -> f32;

    /// Number of steps the animation runs before coming to rest.
    fn duration_frames(&self, initial_velocity: f32) -> u32;

    /// Final resting position.
    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        let frames = self.duration_frames(initial_velocity);
        self.value_after_frames(frames, initial_value, initial_velocity)
    }
}

/// Multiplicative per-frame friction decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionDecaySpec {
    friction: f32,
    rest_threshold: f32,
}

impl FrictionDecaySpec {
    pub const DEFAULT_FRICTION: f32 = 0.95;
    pub const DEFAULT_REST_THRESHOLD: f32 = 0.5;

    /// `friction` is clamped to `[0, 0.999]` and `rest_threshold` to at
    /// least `0.001`.
    pub fn new(friction: f32, rest_threshold: f32) -> Self {
        Self {
            friction: friction.clamp(0.0, MAX_FRICTION),
            rest_threshold: rest_threshold.max(MIN_REST_THRESHOLD),
        }
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Applies a single frame of friction.
    pub fn step(&self, velocity: f32) -> f32 {
        velocity * self.friction
    }

    /// Whether an animation holding `velocity` keeps running.
    pub fn is_moving(&self, velocity: f32) -> bool {
        velocity.abs() > self.rest_threshold
    }
}

impl Default for FrictionDecaySpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FRICTION, Self::DEFAULT_REST_THRESHOLD)
    }
}

impl FloatDecayAnimationSpec for FrictionDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        self.rest_threshold
    }

    fn value_after_frames(&self, frames: u32, initial_value: f32, initial_velocity: f32) -> f32 {
        // Geometric series: v * (1 - f^n) / (1 - f)
        let decayed = self.friction.powi(frames as i32);
        initial_value + initial_velocity * (1.0 - decayed) / (1.0 - self.friction)
    }

    fn duration_frames(&self, initial_velocity: f32) -> u32 {
        let mut velocity = initial_velocity.abs();
        let mut frames = 0u32;
        loop {
            frames += 1;
            velocity = self.step(velocity);
            if !self.is_moving(velocity) {
                return frames;
            }
        }
    }
}
