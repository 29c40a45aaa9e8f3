//! Bridge between the container and a toolbar menu toggle.
//!
//! Toolbars differ per host; anything implementing [`MenuIndicator`] can
//! follow the menu through [`MenuToggleAdapter::attach_indicator`].

use std::rc::Rc;

use crate::layout::SlidingRootNav;
use crate::listeners::ListenerId;
use crate::MenuState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerLockMode {
    Unlocked,
    LockedClosed,
    LockedOpen,
}

/// Toolbar icon driven by the menu, e.g. a hamburger morphing into an arrow.
pub trait MenuIndicator {
    fn on_slide(&self, progress: f32);

    fn on_opened(&self);

    fn on_closed(&self);

    /// Jump to the icon of a resting menu.
    fn sync_state(&self, opened: bool);

    fn on_drag_started(&self) {}
}

/// Drawer-style facade for toolbar toggles.
#[derive(Clone)]
pub struct MenuToggleAdapter {
    nav: SlidingRootNav,
}

impl MenuToggleAdapter {
    pub fn new(nav: SlidingRootNav) -> Self {
        Self { nav }
    }

    pub fn open_drawer(&self) {
        self.nav.open_menu(true);
    }

    pub fn close_drawer(&self) {
        self.nav.close_menu(true);
    }

    pub fn is_drawer_visible(&self) -> bool {
        !self.nav.is_menu_closed()
    }

    pub fn lock_mode(&self) -> DrawerLockMode {
        match (self.nav.is_menu_locked(), self.nav.is_menu_closed()) {
            (true, true) => DrawerLockMode::LockedClosed,
            (true, false) => DrawerLockMode::LockedOpen,
            (false, _) => DrawerLockMode::Unlocked,
        }
    }

    /// What a tap on the toolbar toggle does. A lock pinning the menu in its
    /// current position wins.
    pub fn toggle(&self) {
        let mode = self.lock_mode();
        if self.is_drawer_visible() && mode != DrawerLockMode::LockedOpen {
            self.close_drawer();
        } else if mode != DrawerLockMode::LockedClosed {
            self.open_drawer();
        } else {
            log::debug!("toggle ignored, drawer is {:?}", mode);
        }
    }

    /// Keeps `indicator` in step with the menu until the returned listeners
    /// are removed.
    pub fn attach_indicator(&self, indicator: Rc<dyn MenuIndicator>) -> (ListenerId, ListenerId) {
        let on_drag = Rc::clone(&indicator);
        let drag_id = self
            .nav
            .add_drag_listener(move |progress| on_drag.on_slide(progress));

        let on_state = Rc::clone(&indicator);
        let state_id = self.nav.add_drag_state_listener(move |state| match state {
            MenuState::Open => on_state.on_opened(),
            MenuState::Closed => on_state.on_closed(),
            MenuState::Dragging => on_state.on_drag_started(),
        });

        indicator.sync_state(self.nav.is_menu_opened());
        (drag_id, state_id)
    }

    pub fn nav(&self) -> &SlidingRootNav {
        &self.nav
    }
}
