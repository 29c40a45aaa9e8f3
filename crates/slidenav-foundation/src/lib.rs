//! Input foundation for Slidenav: pointer events, velocity tracking and the
//! gesture thresholds shared by every drag recogniser.

pub mod gesture_constants;
pub mod pointer;
pub mod velocity_tracker;

pub use gesture_constants::GestureConfig;
pub use pointer::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::gesture_constants::GestureConfig;
    pub use crate::pointer::{PointerEvent, PointerEventKind, PointerId};
    pub use crate::velocity_tracker::VelocityTracker1D;
}
