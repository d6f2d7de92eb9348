//! Shared gesture constants for drag scrolling.
//!
//! Velocities are in logical pixels per frame: the drag samples one delta
//! per `mousemove` and the inertia loop applies one step per animation
//! frame, so the two line up without a time base.

/// Per-frame multiplicative velocity decay during inertia.
///
/// Closer to 1.0 coasts further. At 0.95 a 20 px/frame release travels
/// roughly 390 px over about 72 frames.
pub const DEFAULT_FRICTION: f32 = 0.95;

/// Divisor applied to drag distance past either scroll bound.
///
/// The content follows the pointer at one third of the overshoot, which
/// reads as a rubber band rather than a hard stop.
pub const OVERSCROLL_DAMPING: f32 = 3.0;

/// Weight of the newest pointer delta in the smoothed velocity estimate.
///
/// `velocity = w * delta + (1 - w) * velocity`
pub const VELOCITY_SMOOTHING: f32 = 0.8;

/// Release velocity that must be exceeded for inertia to start.
pub const FLING_START_VELOCITY: f32 = 1.0;

/// Velocity at or below which the inertia loop stops.
pub const FLING_REST_VELOCITY: f32 = 0.5;

/// Class present on the container while the pointer is down.
pub const ACTIVE_CLASS: &str = "active";

/// Class present on the container while the overscroll transform animates
/// back to zero. Stylesheets attach the transition to it.
pub const SNAPPING_CLASS: &str = "snapping";
