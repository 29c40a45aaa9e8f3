//! Frame runtime for Slidenav.
//!
//! Everything here runs on the UI thread. The host drives frames by calling
//! [`Runtime::drain_frame_callbacks`] with a monotonic timestamp, and
//! animations register one-shot callbacks through a [`FrameClock`].

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::RuntimeScheduler;
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;
