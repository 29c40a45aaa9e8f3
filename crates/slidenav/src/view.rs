//! Minimal retained view model the navigation container arranges.
//!
//! Hosts map these nodes onto their own widget tree; the container only needs
//! bounds, a graphics layer and a child list.

use std::sync::atomic::{AtomicU64, Ordering};

use slidenav_ui_graphics::{GraphicsLayer, Rect};

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

#[derive(Clone, Debug)]
pub struct ViewNode {
    id: ViewId,
    tag: String,
    bounds: Rect,
    layer: GraphicsLayer,
    children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: ViewId(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed)),
            tag: tag.into(),
            bounds: Rect::default(),
            layer: GraphicsLayer::IDENTITY,
            children: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn layer(&self) -> GraphicsLayer {
        self.layer
    }

    pub fn set_layer(&mut self, layer: GraphicsLayer) {
        self.layer = layer;
    }

    /// Bounds as drawn, after the graphics layer.
    pub fn visual_bounds(&self) -> Rect {
        self.layer.transform_rect(self.bounds)
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn add_child(&mut self, child: ViewNode) {
        self.children.push(child);
    }

    pub fn take_children(&mut self) -> Vec<ViewNode> {
        std::mem::take(&mut self.children)
    }

    /// Depth-first search by tag, including `self`.
    pub fn find_by_tag(&self, tag: &str) -> Option<&ViewNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_tag(tag))
    }
}
