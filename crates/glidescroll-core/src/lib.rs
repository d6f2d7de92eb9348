//! Frame clock runtime for glidescroll.
//!
//! A tiny single-threaded callback queue: work asks for "the next frame",
//! the host platform delivers frames, and registrations cancel on drop.

mod frame_clock;
pub mod platform;
mod runtime;

pub use frame_clock::{FrameClock, PendingFrame};
pub use platform::{FrameScheduler, NoopScheduler};
pub use runtime::{FrameRuntime, RuntimeHandle};

pub type FrameCallbackId = u64;
