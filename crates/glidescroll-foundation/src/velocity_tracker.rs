//! Velocity estimate for drag release.
//!
//! Exponentially smoothed per-event deltas. Each `mousemove` contributes
//! its pointer delta, weighted against the running estimate, so a final
//! jitter does not dominate the release speed.

use crate::gesture_constants::VELOCITY_SMOOTHING;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedVelocity {
    velocity: f32,
    last_position: f32,
    smoothing: f32,
}

impl Default for SmoothedVelocity {
    fn default() -> Self {
        Self::new(VELOCITY_SMOOTHING)
    }
}

impl SmoothedVelocity {
    /// `smoothing` is the weight of the newest delta, clamped to `[0, 1]`.
    pub fn new(smoothing: f32) -> Self {
        Self {
            velocity: 0.0,
            last_position: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Starts a new gesture at `position` with zero velocity.
    pub fn reset(&mut self, position: f32) {
        self.velocity = 0.0;
        self.last_position = position;
    }

    /// Folds in the delta from the previous position and returns the
    /// updated estimate.
    pub fn add_position(&mut self, position: f32) -> f32 {
        let instant = position - self.last_position;
        self.velocity = self.smoothing * instant + (1.0 - self.smoothing) * self.velocity;
        self.last_position = position;
        self.velocity
    }

    /// Pixels per event; positive when the pointer moves right.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn last_position(&self) -> f32 {
        self.last_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_weighted_delta() {
        let mut tracker = SmoothedVelocity::default();
        tracker.reset(500.0);
        let velocity = tracker.add_position(490.0);
        assert!((velocity - -8.0).abs() < 1e-5);
        assert_eq!(tracker.last_position(), 490.0);
    }

    #[test]
    fn blends_with_previous_estimate() {
        let mut tracker = SmoothedVelocity::default();
        tracker.reset(0.0);
        tracker.add_position(10.0); // 8.0
        let velocity = tracker.add_position(15.0); // 0.8 * 5 + 0.2 * 8
        assert!((velocity - 5.6).abs() < 1e-5);
    }

    #[test]
    fn reset_forgets_previous_gesture() {
        let mut tracker = SmoothedVelocity::default();
        tracker.reset(0.0);
        tracker.add_position(100.0);
        tracker.reset(300.0);
        assert_eq!(tracker.velocity(), 0.0);
        assert_eq!(tracker.add_position(300.0), 0.0);
    }

    #[test]
    fn holding_still_decays_toward_zero() {
        let mut tracker = SmoothedVelocity::default();
        tracker.reset(0.0);
        tracker.add_position(50.0);
        for _ in 0..10 {
            tracker.add_position(50.0);
        }
        assert!(tracker.velocity().abs() < 1e-4);
    }
}
