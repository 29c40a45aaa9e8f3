//! Setup through `SlidingRootNavBuilder::inject`.

use std::cell::RefCell;
use std::rc::Rc;

use slidenav::{
    HostContext, MenuState, ScaleTransformation, SetupError, SlideGravity, SlidingRootNavBuilder,
    ViewNode, CLICK_CONSUMER_TAG,
};
use slidenav_core::Runtime;
use slidenav_testing::robot_assertions::{assert_approx_eq, assert_rect_approx_eq};
use slidenav_testing::{window_with_content, NavRobot, DEFAULT_WINDOW};
use slidenav_ui_graphics::{Density, Rect};

fn host(runtime: &Runtime, window: ViewNode) -> HostContext {
    HostContext::new(runtime.handle(), Density::BASELINE, window)
}

#[test]
fn empty_content_container_is_rejected() {
    let runtime = Runtime::default();
    let window = ViewNode::new("window");

    let result = SlidingRootNavBuilder::new(host(&runtime, window))
        .with_menu_view(ViewNode::new("menu"))
        .inject();

    assert_eq!(
        result.err(),
        Some(SetupError::BadContentView { child_count: 0 })
    );
}

#[test]
fn ambiguous_content_container_is_rejected() {
    let runtime = Runtime::default();
    let window = ViewNode::new("window")
        .with_child(ViewNode::new("toolbar"))
        .with_child(ViewNode::new("content"));

    let error = SlidingRootNavBuilder::new(host(&runtime, window))
        .with_menu_view(ViewNode::new("menu"))
        .inject()
        .err()
        .expect("two children must fail");

    assert_eq!(error, SetupError::BadContentView { child_count: 2 });
    assert!(error.to_string().contains("exactly one child"));
}

#[test]
fn missing_menu_is_rejected() {
    let runtime = Runtime::default();

    let result = SlidingRootNavBuilder::new(host(&runtime, window_with_content(DEFAULT_WINDOW)))
        .inject();

    assert_eq!(result.err(), Some(SetupError::NoMenuView));
}

#[test]
fn content_view_override_replaces_window_content() {
    let runtime = Runtime::default();
    let custom = ViewNode::new("frame")
        .with_bounds(Rect::new(0.0, 0.0, 200.0, 400.0))
        .with_child(ViewNode::new("custom_content"));

    let nav = SlidingRootNavBuilder::new(host(&runtime, ViewNode::new("empty_window")))
        .with_content_view(custom)
        .with_menu_view(ViewNode::new("menu"))
        .inject()
        .expect("setup");

    assert_eq!(nav.with_content(|content| content.tag().to_owned()), "custom_content");
    assert_eq!(nav.bounds(), Rect::new(0.0, 0.0, 200.0, 400.0));
}

#[test]
fn layers_stack_menu_consumer_content() {
    let robot = NavRobot::launch(|builder| builder).expect("setup");

    let [bottom, middle, top] = robot.nav().stack_tags();
    assert_eq!(bottom, "menu");
    assert_eq!(middle, CLICK_CONSUMER_TAG);
    assert_eq!(top, "content");
}

#[test]
fn menu_layout_is_built_with_root_bounds() {
    let runtime = Runtime::default();
    let seen = Rc::new(RefCell::new(None));
    let seen_in_factory = Rc::clone(&seen);

    let nav = SlidingRootNavBuilder::new(host(&runtime, window_with_content(DEFAULT_WINDOW)))
        .with_menu_layout(move |bounds| {
            *seen_in_factory.borrow_mut() = Some(bounds);
            ViewNode::new("inflated_menu")
        })
        .inject()
        .expect("setup");

    assert_eq!(*seen.borrow(), Some(DEFAULT_WINDOW));
    assert_eq!(nav.with_menu(|menu| menu.tag().to_owned()), "inflated_menu");
}

#[test]
fn menu_view_wins_over_menu_layout() {
    let runtime = Runtime::default();

    let nav = SlidingRootNavBuilder::new(host(&runtime, window_with_content(DEFAULT_WINDOW)))
        .with_menu_layout(|_| ViewNode::new("inflated_menu"))
        .with_menu_view(ViewNode::new("menu"))
        .inject()
        .expect("setup");

    assert_eq!(nav.with_menu(|menu| menu.tag().to_owned()), "menu");
}

#[test]
fn dp_values_are_rounded_with_host_density() {
    let robot = NavRobot::launch_with_density(Density(1.5), |builder| builder).expect("setup");
    assert_eq!(robot.nav().max_drag_distance(), 270.0);

    let robot = NavRobot::launch_with_density(Density(2.0), |builder| {
        builder.with_drag_distance(100)
    })
    .expect("setup");
    assert_eq!(robot.nav().max_drag_distance(), 200.0);
}

#[test]
fn default_transformation_scales_and_lifts_content() {
    let robot = NavRobot::launch_with_density(Density(2.0), |builder| {
        builder.with_menu_opened(true)
    })
    .expect("setup");

    let layer = robot.nav().content_layer();
    assert_approx_eq(layer.scale, 0.65, 1e-6, "scale");
    assert_eq!(layer.elevation, 16.0);
    assert_eq!(layer.translation_x, 360.0);
}

#[test]
fn configured_transformations_replace_the_default() {
    let robot = NavRobot::launch(|builder| {
        builder
            .with_root_view_y_translation_px(40.0)
            .with_menu_opened(true)
    })
    .expect("setup");

    let layer = robot.nav().content_layer();
    assert_eq!(layer.scale, 1.0);
    assert_eq!(layer.elevation, 0.0);
    assert_eq!(layer.translation_y, 40.0);
}

#[test]
fn builder_listeners_hear_the_initial_open() {
    let progress = Rc::new(RefCell::new(Vec::new()));
    let states = Rc::new(RefCell::new(Vec::new()));
    let progress_log = Rc::clone(&progress);
    let state_log = Rc::clone(&states);

    let robot = NavRobot::launch(move |builder| {
        builder
            .add_drag_listener(move |value| progress_log.borrow_mut().push(value))
            .add_drag_state_listener(move |state| state_log.borrow_mut().push(state))
            .with_menu_opened(true)
    })
    .expect("setup");

    assert!(robot.nav().is_menu_opened());
    assert_eq!(*progress.borrow(), vec![1.0]);
    assert_eq!(*states.borrow(), vec![MenuState::Open]);
}

#[test]
fn dp_transformations_follow_host_density() {
    let robot = NavRobot::launch_with_density(Density(2.0), |builder| {
        builder
            .with_root_view_elevation(4)
            .with_root_view_y_translation(10)
            .with_menu_opened(true)
    })
    .expect("setup");

    let layer = robot.nav().content_layer();
    assert_eq!(layer.scale, 1.0);
    assert_eq!(layer.elevation, 8.0);
    assert_eq!(layer.translation_y, 20.0);
}

#[test]
fn open_content_is_drawn_scaled_and_shifted() {
    let robot = NavRobot::launch(|builder| builder.with_menu_opened(true)).expect("setup");

    assert_rect_approx_eq(
        robot.nav().content_visual_bounds(),
        Rect::new(243.0, 112.0, 234.0, 416.0),
        1e-3,
        "open content",
    );
}

#[test]
fn reconfiguration_reapplies_the_content_layer() {
    let robot = NavRobot::launch(|builder| builder.with_menu_opened(true)).expect("setup");
    let nav = robot.nav();

    nav.set_root_transformation(ScaleTransformation::new(0.5));
    assert_approx_eq(nav.content_layer().scale, 0.5, 1e-6, "scale");
    assert_eq!(nav.content_layer().elevation, 0.0);

    nav.set_gravity(SlideGravity::Right);
    assert_eq!(nav.content_layer().translation_x, -180.0);

    nav.set_max_drag_distance(100.0);
    assert_eq!(nav.content_layer().translation_x, -100.0);
    assert!(nav.is_menu_opened());
}

#[test]
fn content_clickability_can_change_after_setup() {
    let robot = NavRobot::launch(|builder| {
        builder.with_content_clickable_when_menu_opened(false)
    })
    .expect("setup");

    assert!(!robot.nav().is_content_clickable_when_menu_opened());
    robot.nav().set_content_clickable_when_menu_opened(true);
    assert!(robot.nav().is_content_clickable_when_menu_opened());
}
