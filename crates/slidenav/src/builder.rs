//! Fluent setup for [`SlidingRootNav`].

use std::rc::Rc;

use slidenav_core::RuntimeHandle;
use slidenav_ui_graphics::{Density, Rect};

use crate::config::{NavConfig, DEFAULT_END_ELEVATION_DP, DEFAULT_END_SCALE};
use crate::error::SetupError;
use crate::layout::SlidingRootNav;
use crate::saved_state::SavedState;
use crate::toggle::{MenuIndicator, MenuToggleAdapter};
use crate::transform::{
    CompositeTransformation, ElevationTransformation, RootTransformation, ScaleTransformation,
    YTranslationTransformation,
};
use crate::view::ViewNode;
use crate::{MenuState, SlideGravity};

/// What the host window hands to the builder.
pub struct HostContext {
    pub runtime: RuntimeHandle,
    pub density: Density,
    /// Container whose single child becomes the sliding content view.
    pub window_content: ViewNode,
}

impl HostContext {
    pub fn new(runtime: RuntimeHandle, density: Density, window_content: ViewNode) -> Self {
        Self {
            runtime,
            density,
            window_content,
        }
    }
}

type MenuFactory = Box<dyn FnOnce(Rect) -> ViewNode>;

pub struct SlidingRootNavBuilder {
    host: HostContext,
    config: NavConfig,
    content_container: Option<ViewNode>,
    menu_view: Option<ViewNode>,
    menu_layout: Option<MenuFactory>,
    transformations: Vec<Box<dyn RootTransformation>>,
    drag_listeners: Vec<Rc<dyn Fn(f32)>>,
    state_listeners: Vec<Rc<dyn Fn(MenuState)>>,
    indicator: Option<Rc<dyn MenuIndicator>>,
    saved_state: Option<SavedState>,
    menu_opened: bool,
}

impl SlidingRootNavBuilder {
    pub fn new(host: HostContext) -> Self {
        let config = NavConfig::for_density(host.density);
        Self {
            host,
            config,
            content_container: None,
            menu_view: None,
            menu_layout: None,
            transformations: Vec::new(),
            drag_listeners: Vec::new(),
            state_listeners: Vec::new(),
            indicator: None,
            saved_state: None,
            menu_opened: false,
        }
    }

    /// Takes precedence over [`with_menu_layout`](Self::with_menu_layout).
    pub fn with_menu_view(mut self, menu: ViewNode) -> Self {
        self.menu_view = Some(menu);
        self
    }

    /// Builds the menu lazily from the container bounds.
    pub fn with_menu_layout(mut self, factory: impl FnOnce(Rect) -> ViewNode + 'static) -> Self {
        self.menu_layout = Some(Box::new(factory));
        self
    }

    pub fn with_toolbar_menu_toggle(mut self, indicator: impl MenuIndicator + 'static) -> Self {
        self.indicator = Some(Rc::new(indicator));
        self
    }

    pub fn with_gravity(mut self, gravity: SlideGravity) -> Self {
        self.config.gravity = gravity;
        self
    }

    /// Replaces the window content container.
    pub fn with_content_view(mut self, container: ViewNode) -> Self {
        self.content_container = Some(container);
        self
    }

    pub fn with_menu_locked(mut self, locked: bool) -> Self {
        self.config.locked = locked;
        self
    }

    /// Restores from `state` instead of honouring [`with_menu_opened`](Self::with_menu_opened).
    pub fn with_saved_state(mut self, state: SavedState) -> Self {
        self.saved_state = Some(state);
        self
    }

    pub fn with_menu_opened(mut self, opened: bool) -> Self {
        self.menu_opened = opened;
        self
    }

    pub fn with_content_clickable_when_menu_opened(mut self, clickable: bool) -> Self {
        self.config.content_clickable_when_open = clickable;
        self
    }

    pub fn with_drag_distance(self, dp: i32) -> Self {
        let px = self.host.density.round_dp_to_px(dp) as f32;
        self.with_drag_distance_px(px)
    }

    pub fn with_drag_distance_px(mut self, px: f32) -> Self {
        self.config.max_drag_distance = px;
        self
    }

    pub fn with_root_view_scale(self, end_scale: f32) -> Self {
        self.add_root_transformation(ScaleTransformation::new(end_scale))
    }

    pub fn with_root_view_elevation(self, dp: i32) -> Self {
        let px = self.host.density.round_dp_to_px(dp) as f32;
        self.with_root_view_elevation_px(px)
    }

    pub fn with_root_view_elevation_px(self, px: f32) -> Self {
        self.add_root_transformation(ElevationTransformation::new(px))
    }

    pub fn with_root_view_y_translation(self, dp: i32) -> Self {
        let px = self.host.density.round_dp_to_px(dp) as f32;
        self.with_root_view_y_translation_px(px)
    }

    pub fn with_root_view_y_translation_px(self, px: f32) -> Self {
        self.add_root_transformation(YTranslationTransformation::new(px))
    }

    pub fn add_root_transformation(
        mut self,
        transformation: impl RootTransformation + 'static,
    ) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn add_drag_listener(mut self, listener: impl Fn(f32) + 'static) -> Self {
        self.drag_listeners.push(Rc::new(listener));
        self
    }

    pub fn add_drag_state_listener(mut self, listener: impl Fn(MenuState) + 'static) -> Self {
        self.state_listeners.push(Rc::new(listener));
        self
    }

    /// Builds the container around the content view.
    ///
    /// Fails when the content container does not hold exactly one view or
    /// when no menu was supplied.
    pub fn inject(self) -> Result<SlidingRootNav, SetupError> {
        let SlidingRootNavBuilder {
            host,
            config,
            content_container,
            menu_view,
            menu_layout,
            transformations,
            drag_listeners,
            state_listeners,
            indicator,
            saved_state,
            menu_opened,
        } = self;
        let HostContext {
            runtime,
            density,
            window_content,
        } = host;

        let mut container = content_container.unwrap_or(window_content);
        if container.child_count() != 1 {
            return Err(SetupError::BadContentView {
                child_count: container.child_count(),
            });
        }
        let bounds = container.bounds();
        let content = match container.take_children().pop() {
            Some(content) => content,
            None => return Err(SetupError::BadContentView { child_count: 0 }),
        };

        let menu = match (menu_view, menu_layout) {
            (Some(menu), _) => menu,
            (None, Some(factory)) => factory(bounds),
            (None, None) => return Err(SetupError::NoMenuView),
        };

        let transformation = composite_for(transformations, density);
        let nav = SlidingRootNav::new(runtime, &config, bounds, menu, content, transformation);
        for listener in drag_listeners {
            nav.add_drag_listener_rc(listener);
        }
        for listener in state_listeners {
            nav.add_drag_state_listener_rc(listener);
        }

        if let Some(indicator) = indicator {
            MenuToggleAdapter::new(nav.clone()).attach_indicator(indicator);
        }

        match saved_state {
            Some(state) => {
                nav.restore_state(&state);
            }
            None if menu_opened => nav.open_menu(false),
            None => {}
        }
        nav.set_menu_locked(config.locked);

        log::debug!(
            "sliding root nav injected: gravity {:?}, drag distance {}px, locked {}",
            config.gravity,
            nav.max_drag_distance(),
            config.locked
        );
        Ok(nav)
    }
}

fn composite_for(
    transformations: Vec<Box<dyn RootTransformation>>,
    density: Density,
) -> Box<dyn RootTransformation> {
    if transformations.is_empty() {
        let elevation = density.round_dp_to_px(DEFAULT_END_ELEVATION_DP) as f32;
        return Box::new(
            CompositeTransformation::new()
                .with(ScaleTransformation::new(DEFAULT_END_SCALE))
                .with(ElevationTransformation::new(elevation)),
        );
    }
    Box::new(transformations.into_iter().collect::<CompositeTransformation>())
}
