use slidenav_ui_graphics::GraphicsLayer;

use super::{evaluate, RootTransformation};

/// Smallest end scale accepted; anything lower collapses the content view.
pub const MIN_END_SCALE: f32 = 0.01;

/// Shrinks the content view from 1.0 to `end_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransformation {
    end_scale: f32,
}

impl ScaleTransformation {
    pub fn new(end_scale: f32) -> Self {
        if end_scale < MIN_END_SCALE || !end_scale.is_finite() {
            log::warn!("end scale {end_scale} is below {MIN_END_SCALE}, clamping");
        }
        let end_scale = if end_scale.is_finite() {
            end_scale.max(MIN_END_SCALE)
        } else {
            MIN_END_SCALE
        };
        Self { end_scale }
    }

    pub fn end_scale(&self) -> f32 {
        self.end_scale
    }
}

impl RootTransformation for ScaleTransformation {
    fn transform(&self, drag_progress: f32, layer: &mut GraphicsLayer) {
        layer.scale = evaluate(drag_progress, 1.0, self.end_scale);
    }
}
