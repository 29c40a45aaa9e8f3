//! Platform abstraction for runtime scheduling.
//!
//! The host platform decides when frames actually happen; the runtime only
//! asks for one whenever a frame callback is registered.

/// Schedules frames for the Slidenav runtime.
///
/// Implementations typically request a redraw from the windowing system. They
/// must be safe to call from the UI thread at any time, including from inside
/// a frame callback.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}
