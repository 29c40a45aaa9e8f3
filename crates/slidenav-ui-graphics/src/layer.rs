use crate::Rect;

/// Visual properties applied on top of a view's laid out bounds.
///
/// Scale pivots around the center of the bounds, translation is applied after
/// scaling. Elevation only affects shadow depth and never the hit area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub scale: f32,
    pub elevation: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl GraphicsLayer {
    pub const IDENTITY: GraphicsLayer = GraphicsLayer {
        scale: 1.0,
        elevation: 0.0,
        translation_x: 0.0,
        translation_y: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Projects `bounds` through this layer, returning where the view is drawn.
    pub fn transform_rect(&self, bounds: Rect) -> Rect {
        bounds
            .scale_about_center(self.scale)
            .translate(self.translation_x, self.translation_y)
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "tests/layer_tests.rs"]
mod tests;
