use slidenav_ui_graphics::GraphicsLayer;

use super::{evaluate, RootTransformation};

/// Shifts the content view vertically by up to `end_translation` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YTranslationTransformation {
    end_translation: f32,
}

impl YTranslationTransformation {
    pub fn new(end_translation: f32) -> Self {
        Self { end_translation }
    }

    pub fn end_translation(&self) -> f32 {
        self.end_translation
    }
}

impl RootTransformation for YTranslationTransformation {
    fn transform(&self, drag_progress: f32, layer: &mut GraphicsLayer) {
        layer.translation_y = evaluate(drag_progress, 0.0, self.end_translation);
    }
}
