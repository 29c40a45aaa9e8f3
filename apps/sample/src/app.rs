use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use slidenav::{
    HostContext, MenuIndicator, MenuState, MenuToggleAdapter, PointerRoute, SavedState,
    SetupError, SlidingRootNav, SlidingRootNavBuilder, ViewNode,
};
use slidenav_core::Runtime;
use slidenav_foundation::PointerEvent;
use slidenav_ui_graphics::{Density, Rect};
use web_time::Instant;

use crate::screens::{menu_item_at, menu_item_center, menu_view, Screen};

pub const WINDOW: Rect = Rect::new(0.0, 0.0, 360.0, 640.0);
const FRAME: Duration = Duration::from_millis(16);

/// Hamburger icon that turns into an arrow as the menu opens.
#[derive(Clone, Default)]
pub struct ToolbarIcon {
    arrow: Rc<Cell<f32>>,
}

impl ToolbarIcon {
    pub fn arrow_progress(&self) -> f32 {
        self.arrow.get()
    }
}

impl MenuIndicator for ToolbarIcon {
    fn on_slide(&self, progress: f32) {
        self.arrow.set(progress);
    }

    fn on_opened(&self) {
        log::info!("toolbar: menu opened");
    }

    fn on_closed(&self) {
        log::info!("toolbar: menu closed");
    }

    fn sync_state(&self, opened: bool) {
        self.arrow.set(if opened { 1.0 } else { 0.0 });
    }
}

/// One activity's worth of state: the frame runtime, the drawer and the
/// screen currently shown in the content view.
pub struct SampleApp {
    runtime: Runtime,
    nav: SlidingRootNav,
    toggle: MenuToggleAdapter,
    icon: ToolbarIcon,
    screen: Cell<Screen>,
    started: Instant,
    next_pointer: u64,
}

impl SampleApp {
    pub fn launch(density: Density, saved: Option<SavedState>) -> Result<Self, SetupError> {
        let runtime = Runtime::default();
        let content = ViewNode::new("content").with_child(Screen::Dashboard.view(WINDOW));
        let window = ViewNode::new("window")
            .with_bounds(WINDOW)
            .with_child(content);

        let icon = ToolbarIcon::default();
        let mut builder =
            SlidingRootNavBuilder::new(HostContext::new(runtime.handle(), density, window))
                .with_menu_layout(menu_view)
                .with_toolbar_menu_toggle(icon.clone())
                .with_content_clickable_when_menu_opened(false)
                .add_drag_state_listener(|state| {
                    if state == MenuState::Dragging {
                        log::debug!("menu moving");
                    }
                });
        if let Some(saved) = saved {
            builder = builder.with_saved_state(saved);
        }
        let nav = builder.inject()?;

        Ok(Self {
            runtime,
            toggle: MenuToggleAdapter::new(nav.clone()),
            nav,
            icon,
            screen: Cell::new(Screen::Dashboard),
            started: Instant::now(),
            next_pointer: 0,
        })
    }

    pub fn nav(&self) -> &SlidingRootNav {
        &self.nav
    }

    pub fn screen(&self) -> Screen {
        self.screen.get()
    }

    pub fn icon(&self) -> &ToolbarIcon {
        &self.icon
    }

    pub fn save(&self) -> SavedState {
        let mut state = SavedState::new();
        self.nav.save_state(&mut state);
        state
    }

    fn now_ms(&self) -> i64 {
        self.started.elapsed().as_millis() as i64
    }

    /// Runs frames in real time until the drawer stops moving.
    pub fn run_until_idle(&self) {
        while self.runtime.has_frame_callbacks() {
            std::thread::sleep(FRAME);
            let nanos = self.started.elapsed().as_nanos() as u64;
            self.runtime.drain_frame_callbacks(nanos);
        }
    }

    pub fn press_toolbar_toggle(&self) {
        self.toggle.toggle();
    }

    /// Taps `(x, y)`; menu items switch the screen.
    pub fn tap(&mut self, x: f32, y: f32) -> PointerRoute {
        self.next_pointer += 1;
        let id = self.next_pointer;
        let down = PointerEvent::down(x, y, self.now_ms()).with_id(id);
        let route = self.nav.dispatch_pointer(&down);
        self.nav
            .dispatch_pointer(&PointerEvent::up(x, y, self.now_ms()).with_id(id));

        if route == PointerRoute::Menu {
            if let Some(screen) = self.nav.with_menu(|menu| menu_item_at(menu, x, y)) {
                self.show(screen);
            }
        }
        route
    }

    pub fn tap_menu_item(&mut self, screen: Screen) -> PointerRoute {
        match self.nav.with_menu(|menu| menu_item_center(menu, screen)) {
            Some((x, y)) => self.tap(x, y),
            None => PointerRoute::Consumed,
        }
    }

    /// Drags with the real clock, one frame per step.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        self.next_pointer += 1;
        let id = self.next_pointer;
        self.nav
            .dispatch_pointer(&PointerEvent::down(from.0, from.1, self.now_ms()).with_id(id));
        for step in 1..=steps {
            std::thread::sleep(FRAME);
            let t = step as f32 / steps as f32;
            let x = from.0 + (to.0 - from.0) * t;
            let y = from.1 + (to.1 - from.1) * t;
            self.nav
                .dispatch_pointer(&PointerEvent::moved(x, y, self.now_ms()).with_id(id));
        }
        self.nav
            .dispatch_pointer(&PointerEvent::up(to.0, to.1, self.now_ms()).with_id(id));
    }

    /// Swaps the content view's screen and closes the menu.
    pub fn show(&self, screen: Screen) {
        log::info!("showing {}", screen.title());
        self.nav.with_content_mut(|content| {
            let bounds = content.bounds();
            content.take_children();
            content.add_child(screen.view(bounds));
        });
        self.screen.set(screen);
        self.nav.close_menu(true);
    }

    pub fn visible_screen_tag(&self) -> Option<String> {
        self.nav.with_content(|content| {
            content
                .children()
                .first()
                .map(|screen| screen.tag().to_owned())
        })
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
