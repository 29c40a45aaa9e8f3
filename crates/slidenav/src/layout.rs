//! The root container stacking menu, click consumer and content.
//!
//! [`SlidingRootNav`] is a cheap handle over shared state. Every public call
//! borrows that state only long enough to update the drag controller and the
//! content view; listeners run afterwards with no borrow held, so they are
//! free to call back into the container.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slidenav_animation::{Animatable, AnimationSpec, AnimationStatus, Easing};
use slidenav_core::RuntimeHandle;
use slidenav_foundation::{PointerEvent, PointerEventKind, PointerId};
use slidenav_ui_graphics::{GraphicsLayer, Rect};

use crate::click_consumer::{ClickConsumer, PointerRoute};
use crate::config::NavConfig;
use crate::drag::{settle_duration_millis, DragController, DragEffect, DragEffects, GesturePhase};
use crate::listeners::{DragListeners, DragStateListeners, ListenerId};
use crate::saved_state::{SavedState, MENU_OPENED_KEY};
use crate::transform::RootTransformation;
use crate::view::ViewNode;
use crate::{MenuState, SlideGravity};

pub const CLICK_CONSUMER_TAG: &str = "hidden_menu_click_consumer";

#[derive(Clone)]
pub struct SlidingRootNav {
    inner: Rc<RefCell<NavInner>>,
}

struct NavInner {
    bounds: Rect,
    menu: ViewNode,
    consumer_node: ViewNode,
    content: ViewNode,
    consumer: ClickConsumer,
    drag: DragController,
    transformation: Box<dyn RootTransformation>,
    content_clickable_when_open: bool,
    settle_easing: Easing,
    drag_listeners: DragListeners,
    state_listeners: DragStateListeners,
    settle: Animatable,
    settle_target: Option<MenuState>,
    press_pointer: Option<PointerId>,
    press_route: Option<PointerRoute>,
    close_on_release: bool,
}

impl SlidingRootNav {
    pub(crate) fn new(
        runtime: RuntimeHandle,
        config: &NavConfig,
        bounds: Rect,
        menu: ViewNode,
        content: ViewNode,
        transformation: Box<dyn RootTransformation>,
    ) -> Self {
        let drag = DragController::new(config.gravity, config.max_drag_distance, config.gestures);

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<NavInner>>| {
            let weak = weak.clone();
            let settle = Animatable::new(0.0, runtime, move |value, status| {
                if let Some(inner) = weak.upgrade() {
                    Self::on_settle_frame(&inner, value, status);
                }
            });
            RefCell::new(NavInner {
                bounds,
                menu: menu.with_bounds(bounds),
                consumer_node: ViewNode::new(CLICK_CONSUMER_TAG).with_bounds(bounds),
                content: content.with_bounds(bounds),
                consumer: ClickConsumer::new(),
                drag,
                transformation,
                content_clickable_when_open: config.content_clickable_when_open,
                settle_easing: config.settle_easing,
                drag_listeners: DragListeners::new(),
                state_listeners: DragStateListeners::new(),
                settle,
                settle_target: None,
                press_pointer: None,
                press_route: None,
                close_on_release: false,
            })
        });
        inner.borrow_mut().sync_content();
        Self { inner }
    }

    /// Animates or jumps to fully open. Works while locked.
    pub fn open_menu(&self, animated: bool) {
        self.change_menu_visibility(MenuState::Open, animated);
    }

    /// Animates or jumps to fully closed. Works while locked.
    pub fn close_menu(&self, animated: bool) {
        self.change_menu_visibility(MenuState::Closed, animated);
    }

    fn change_menu_visibility(&self, target: MenuState, animated: bool) {
        if animated {
            Self::settle(&self.inner, target, 0.0);
        } else {
            let effects = {
                let mut nav = self.inner.borrow_mut();
                nav.stop_settle();
                nav.drag.snap(target)
            };
            Self::dispatch(&self.inner, effects);
        }
    }

    pub fn is_menu_closed(&self) -> bool {
        self.menu_state() == MenuState::Closed
    }

    pub fn is_menu_opened(&self) -> bool {
        self.menu_state() == MenuState::Open
    }

    pub fn is_menu_locked(&self) -> bool {
        self.inner.borrow().drag.is_locked()
    }

    /// Locking only gates user drags; programmatic open and close still work.
    pub fn set_menu_locked(&self, locked: bool) {
        let effects = self.inner.borrow_mut().drag.set_locked(locked);
        log::debug!("menu {}", if locked { "locked" } else { "unlocked" });
        Self::dispatch(&self.inner, effects);
    }

    pub fn menu_state(&self) -> MenuState {
        self.inner.borrow().drag.state()
    }

    pub fn drag_progress(&self) -> f32 {
        self.inner.borrow().drag.progress()
    }

    /// True while a settle animation is in flight.
    pub fn is_settling(&self) -> bool {
        self.inner.borrow().settle_target.is_some()
    }

    pub fn gravity(&self) -> SlideGravity {
        self.inner.borrow().drag.gravity()
    }

    pub fn set_gravity(&self, gravity: SlideGravity) {
        let mut nav = self.inner.borrow_mut();
        nav.drag.set_gravity(gravity);
        nav.sync_content();
    }

    pub fn max_drag_distance(&self) -> f32 {
        self.inner.borrow().drag.max_drag_distance()
    }

    pub fn set_max_drag_distance(&self, px: f32) {
        let mut nav = self.inner.borrow_mut();
        nav.drag.set_max_drag_distance(px);
        nav.sync_content();
    }

    pub fn set_root_transformation(&self, transformation: impl RootTransformation + 'static) {
        let mut nav = self.inner.borrow_mut();
        nav.transformation = Box::new(transformation);
        nav.sync_content();
    }

    pub fn is_content_clickable_when_menu_opened(&self) -> bool {
        self.inner.borrow().content_clickable_when_open
    }

    pub fn set_content_clickable_when_menu_opened(&self, clickable: bool) {
        self.inner.borrow_mut().content_clickable_when_open = clickable;
    }

    /// Graphics layer currently applied to the content view.
    pub fn content_layer(&self) -> GraphicsLayer {
        self.inner.borrow().content.layer()
    }

    /// Where the content view is drawn after its graphics layer.
    pub fn content_visual_bounds(&self) -> Rect {
        self.inner.borrow().content.visual_bounds()
    }

    pub fn click_consumer(&self) -> ClickConsumer {
        self.inner.borrow().consumer
    }

    pub fn bounds(&self) -> Rect {
        self.inner.borrow().bounds
    }

    /// Lays the container out again; every layer fills the new bounds.
    pub fn set_bounds(&self, bounds: Rect) {
        let mut nav = self.inner.borrow_mut();
        nav.bounds = bounds;
        nav.menu.set_bounds(bounds);
        nav.consumer_node.set_bounds(bounds);
        nav.content.set_bounds(bounds);
        nav.sync_content();
    }

    /// Tags of the stacked layers, bottom to top.
    pub fn stack_tags(&self) -> [String; 3] {
        let nav = self.inner.borrow();
        [
            nav.menu.tag().to_owned(),
            nav.consumer_node.tag().to_owned(),
            nav.content.tag().to_owned(),
        ]
    }

    pub fn with_menu<R>(&self, f: impl FnOnce(&ViewNode) -> R) -> R {
        f(&self.inner.borrow().menu)
    }

    pub fn with_content<R>(&self, f: impl FnOnce(&ViewNode) -> R) -> R {
        f(&self.inner.borrow().content)
    }

    /// Mutates the content view; its bounds and layer stay owned by the container.
    pub fn with_content_mut<R>(&self, f: impl FnOnce(&mut ViewNode) -> R) -> R {
        let mut nav = self.inner.borrow_mut();
        let result = f(&mut nav.content);
        let bounds = nav.bounds;
        nav.content.set_bounds(bounds);
        nav.sync_content();
        result
    }

    pub fn add_drag_listener(&self, listener: impl Fn(f32) + 'static) -> ListenerId {
        self.inner.borrow_mut().drag_listeners.add(listener)
    }

    pub(crate) fn add_drag_listener_rc(&self, listener: Rc<dyn Fn(f32)>) -> ListenerId {
        self.inner.borrow_mut().drag_listeners.add_rc(listener)
    }

    pub fn remove_drag_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().drag_listeners.remove(id)
    }

    pub fn add_drag_state_listener(&self, listener: impl Fn(MenuState) + 'static) -> ListenerId {
        self.inner.borrow_mut().state_listeners.add(listener)
    }

    pub(crate) fn add_drag_state_listener_rc(&self, listener: Rc<dyn Fn(MenuState)>) -> ListenerId {
        self.inner.borrow_mut().state_listeners.add_rc(listener)
    }

    pub fn remove_drag_state_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().state_listeners.remove(id)
    }

    /// Feeds one pointer event through the container and reports who gets it.
    ///
    /// Events the container keeps for itself are marked consumed.
    pub fn dispatch_pointer(&self, event: &PointerEvent) -> PointerRoute {
        let (route, effects, close) = self.inner.borrow_mut().handle_pointer(event);
        if route == PointerRoute::Consumed {
            event.consume();
        }
        Self::dispatch(&self.inner, effects);
        if close {
            log::debug!("click on content closes the menu");
            self.close_menu(true);
        }
        route
    }

    /// Stores whether the menu is open, or about to be once a settle ends.
    pub fn save_state(&self, state: &mut SavedState) {
        let nav = self.inner.borrow();
        let opened = match nav.settle_target {
            Some(target) => target == MenuState::Open,
            None => nav.drag.progress() > 0.5,
        };
        state.put_bool(MENU_OPENED_KEY, opened);
    }

    /// Applies a saved open flag without animating. Returns false when absent.
    pub fn restore_state(&self, state: &SavedState) -> bool {
        let Some(opened) = state.get_bool(MENU_OPENED_KEY) else {
            return false;
        };
        log::debug!("restoring menu opened={opened}");
        let target = if opened {
            MenuState::Open
        } else {
            MenuState::Closed
        };
        self.change_menu_visibility(target, false);
        true
    }

    fn settle(inner: &Rc<RefCell<NavInner>>, target: MenuState, velocity: f32) {
        let (effects, animation) = {
            let mut nav = inner.borrow_mut();
            nav.stop_settle();
            let from = nav.drag.progress();
            let (effects, animate) = nav.drag.begin_settle(target);
            let animation = match target.boundary_progress() {
                Some(to) if animate => {
                    let max = nav.drag.max_drag_distance();
                    let duration = settle_duration_millis((to - from) * max, velocity, max);
                    nav.settle_target = Some(target);
                    let spec = AnimationSpec::tween(duration, nav.settle_easing);
                    Some((nav.settle.clone(), from, to, spec))
                }
                _ => None,
            };
            (effects, animation)
        };
        if let Some((settle, from, to, spec)) = animation {
            log::debug!(
                "settling {:?} from {:.3} over {}ms",
                target,
                from,
                spec.duration_millis
            );
            settle.animate_to(from, to, spec);
        }
        Self::dispatch(inner, effects);
    }

    fn on_settle_frame(inner: &Rc<RefCell<NavInner>>, value: f32, status: AnimationStatus) {
        let effects = {
            let mut nav = inner.borrow_mut();
            let Some(target) = nav.settle_target else {
                return;
            };
            let finished = status == AnimationStatus::Finished;
            if finished {
                nav.settle_target = None;
            }
            nav.drag.settle_frame(value, finished, target)
        };
        Self::dispatch(inner, effects);
    }

    fn dispatch(inner: &Rc<RefCell<NavInner>>, effects: DragEffects) {
        for effect in effects {
            match effect {
                DragEffect::Progress(progress) => {
                    let listeners = {
                        let mut nav = inner.borrow_mut();
                        // Superseded by a listener; the newer value was dispatched.
                        if nav.drag.progress() != progress {
                            continue;
                        }
                        nav.sync_content();
                        nav.drag_listeners.snapshot()
                    };
                    for listener in listeners {
                        if inner.borrow().drag.progress() != progress {
                            break;
                        }
                        listener(progress);
                    }
                }
                DragEffect::State(state) => {
                    let listeners = {
                        let mut nav = inner.borrow_mut();
                        if nav.drag.state() != state {
                            continue;
                        }
                        nav.sync_content();
                        nav.state_listeners.snapshot()
                    };
                    for listener in listeners {
                        if inner.borrow().drag.state() != state {
                            break;
                        }
                        listener(state);
                    }
                }
                DragEffect::Settle(request) => {
                    Self::settle(inner, request.target, request.velocity);
                }
            }
        }
    }
}

impl NavInner {
    fn stop_settle(&mut self) {
        if self.settle_target.take().is_some() {
            self.settle.stop();
        }
    }

    /// Re-derives the content layer and the consumer from the current progress.
    ///
    /// Horizontal translation always comes from gravity and progress, after
    /// the configured transformation ran.
    fn sync_content(&mut self) {
        let progress = self.drag.progress();
        let mut layer = GraphicsLayer::IDENTITY;
        self.transformation.transform(progress, &mut layer);
        layer.translation_x = self
            .drag
            .gravity()
            .content_offset(progress, self.drag.max_drag_distance());
        self.content.set_layer(layer);
        self.consumer
            .sync(self.drag.state(), self.content.visual_bounds());
    }

    fn route_press(&self, event: &PointerEvent) -> PointerRoute {
        self.consumer
            .route_press(event.position, self.content_clickable_when_open)
    }

    fn routed(&self, event: &PointerEvent) -> PointerRoute {
        self.press_route.unwrap_or_else(|| self.route_press(event))
    }

    /// True for a pointer that went down while another one is still pressed.
    fn is_secondary(&self, event: &PointerEvent) -> bool {
        matches!(self.press_pointer, Some(id) if id != event.id)
    }

    fn handle_pointer(&mut self, event: &PointerEvent) -> (PointerRoute, DragEffects, bool) {
        // Only the first pointer down owns the press route and the close decision.
        if self.is_secondary(event) && event.kind != PointerEventKind::Cancel {
            return (self.route_press(event), DragEffects::new(), false);
        }
        match event.kind {
            PointerEventKind::Down => {
                let clickable = self.content_clickable_when_open;
                let route = self.route_press(event);
                let over_content = self.consumer.covers(event.position);
                // A locked menu swallows the tap but stays where it is.
                self.close_on_release =
                    !self.drag.is_locked() && self.consumer.blocks_click(event.position, clickable);
                if self.drag.press(event, over_content) && self.settle_target.is_some() {
                    log::debug!("press caught the content mid-settle");
                    self.stop_settle();
                }
                self.press_pointer = Some(event.id);
                self.press_route = Some(route);
                (route, DragEffects::new(), false)
            }
            PointerEventKind::Move => {
                let effects = self.drag.drag(event);
                if self.drag.gesture_phase() == Some(GesturePhase::Dragging) {
                    self.close_on_release = false;
                    (PointerRoute::Consumed, effects, false)
                } else {
                    (self.routed(event), effects, false)
                }
            }
            PointerEventKind::Up => {
                let dragged = self.drag.gesture_phase() == Some(GesturePhase::Dragging);
                let effects = self.drag.release(event);
                let close = std::mem::take(&mut self.close_on_release) && !dragged;
                let route = if dragged || close {
                    PointerRoute::Consumed
                } else {
                    self.routed(event)
                };
                self.press_pointer = None;
                self.press_route = None;
                (route, effects, close)
            }
            PointerEventKind::Cancel => {
                let effects = self.drag.cancel();
                self.close_on_release = false;
                self.press_pointer = None;
                let route = self.press_route.take().unwrap_or(PointerRoute::Consumed);
                (route, effects, false)
            }
        }
    }
}
