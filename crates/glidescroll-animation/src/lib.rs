//! Animation specs used by glidescroll.

mod decay_spec;

pub use decay_spec::{FloatDecayAnimationSpec, FrictionDecaySpec};
