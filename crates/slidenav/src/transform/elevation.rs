use slidenav_ui_graphics::GraphicsLayer;

use super::{evaluate, RootTransformation};

/// Raises the content view's shadow from 0 to `end_elevation` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationTransformation {
    end_elevation: f32,
}

impl ElevationTransformation {
    pub fn new(end_elevation: f32) -> Self {
        if end_elevation < 0.0 {
            log::warn!("negative elevation {end_elevation} clamped to 0");
        }
        Self {
            end_elevation: end_elevation.max(0.0),
        }
    }

    pub fn end_elevation(&self) -> f32 {
        self.end_elevation
    }
}

impl RootTransformation for ElevationTransformation {
    fn transform(&self, drag_progress: f32, layer: &mut GraphicsLayer) {
        layer.elevation = evaluate(drag_progress, 0.0, self.end_elevation);
    }
}
