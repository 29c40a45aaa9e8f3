//! Visual transformations applied to the content view as the menu opens.
//!
//! Every transformation interpolates one property of the content view's
//! [`GraphicsLayer`] between its identity value at progress 0 and a configured
//! end value at progress 1. Progress is clamped by the drag state machine
//! before it gets here.

mod composite;
mod elevation;
mod scale;
mod translation;

pub use composite::CompositeTransformation;
pub use elevation::ElevationTransformation;
pub use scale::{ScaleTransformation, MIN_END_SCALE};
pub use translation::YTranslationTransformation;

use slidenav_ui_graphics::GraphicsLayer;

/// Maps drag progress onto the content view's graphics layer.
///
/// Implementations must be pure: the same progress always writes the same
/// values, regardless of what was applied before.
pub trait RootTransformation {
    fn transform(&self, drag_progress: f32, layer: &mut GraphicsLayer);
}

impl<F> RootTransformation for F
where
    F: Fn(f32, &mut GraphicsLayer),
{
    fn transform(&self, drag_progress: f32, layer: &mut GraphicsLayer) {
        self(drag_progress, layer)
    }
}

/// Linear interpolation from `start` (progress 0) to `end` (progress 1).
pub fn evaluate(fraction: f32, start: f32, end: f32) -> f32 {
    start + fraction * (end - start)
}

#[cfg(test)]
#[path = "../tests/transform_tests.rs"]
mod tests;
