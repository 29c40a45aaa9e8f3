//! Transparent layer stacked between the menu and the content view.
//!
//! While the menu is closed it swallows presses that miss the content view so
//! the hidden menu never reacts to them. Once the menu is showing it tracks
//! the content view's drawn bounds and decides whether a press on the content
//! reaches it or only closes the menu.

use slidenav_ui_graphics::{Point, Rect};

use crate::MenuState;

/// Where a pointer press ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRoute {
    Menu,
    Content,
    /// Swallowed by the container itself.
    Consumed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickConsumer {
    bounds: Rect,
    visible: bool,
}

impl ClickConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present whenever the menu is not fully closed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Drawn bounds of the content view it covers.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn sync(&mut self, state: MenuState, content_bounds: Rect) {
        self.visible = state != MenuState::Closed;
        self.bounds = content_bounds;
    }

    pub fn covers(&self, position: Point) -> bool {
        self.bounds.contains_point(position)
    }

    pub fn route_press(&self, position: Point, content_clickable_when_open: bool) -> PointerRoute {
        let over_content = self.covers(position);
        match (self.visible, over_content) {
            (false, true) => PointerRoute::Content,
            (false, false) => PointerRoute::Consumed,
            (true, true) if content_clickable_when_open => PointerRoute::Content,
            (true, true) => PointerRoute::Consumed,
            (true, false) => PointerRoute::Menu,
        }
    }

    /// A press on the content that should close the menu instead of reaching it.
    pub fn blocks_click(&self, position: Point, content_clickable_when_open: bool) -> bool {
        self.visible && !content_clickable_when_open && self.covers(position)
    }
}
