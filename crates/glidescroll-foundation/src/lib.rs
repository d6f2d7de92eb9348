//! Platform-neutral drag-to-scroll controller for horizontal carousels.
//!
//! The controller talks to its container through [`ScrollContainer`], so the
//! same gesture logic runs against a DOM element or an in-memory fake.

pub mod config;
pub mod draggable_slider;
pub mod gesture_constants;
pub mod inertia;
pub mod input;
pub mod overscroll;
pub mod scroll_container;
pub mod velocity_tracker;

pub use config::SliderConfig;
pub use draggable_slider::{DraggableSlider, SliderPhase};
pub use inertia::InertiaAnimation;
pub use input::{PointerEventKind, SliderEvent};
pub use overscroll::{resolve_drag_scroll, DragScroll};
pub use scroll_container::ScrollContainer;
pub use velocity_tracker::SmoothedVelocity;
