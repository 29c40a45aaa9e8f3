use smallvec::SmallVec;

use slidenav_ui_graphics::GraphicsLayer;

use super::RootTransformation;

/// Applies its members in registration order.
///
/// Members writing the same property are not merged: the last one wins.
#[derive(Default)]
pub struct CompositeTransformation {
    transformations: SmallVec<[Box<dyn RootTransformation>; 4]>,
}

impl CompositeTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, transformation: impl RootTransformation + 'static) -> Self {
        self.push(Box::new(transformation));
        self
    }

    pub fn push(&mut self, transformation: Box<dyn RootTransformation>) {
        self.transformations.push(transformation);
    }

    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }
}

impl FromIterator<Box<dyn RootTransformation>> for CompositeTransformation {
    fn from_iter<I: IntoIterator<Item = Box<dyn RootTransformation>>>(iter: I) -> Self {
        Self {
            transformations: iter.into_iter().collect(),
        }
    }
}

impl RootTransformation for CompositeTransformation {
    fn transform(&self, drag_progress: f32, layer: &mut GraphicsLayer) {
        for transformation in &self.transformations {
            transformation.transform(drag_progress, layer);
        }
    }
}
