//! Testing utilities and harness for glidescroll

pub mod fake_container;
pub mod robot;
pub mod robot_assertions;

pub use fake_container::FakeContainer;
pub use robot::{ManualScheduler, SliderRobot};

pub mod prelude {
    pub use crate::fake_container::FakeContainer;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
