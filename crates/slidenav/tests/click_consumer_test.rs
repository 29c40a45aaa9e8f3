//! Pointer routing between menu, content and the hidden-menu click consumer.

use slidenav::{MenuState, PointerRoute};
use slidenav_foundation::PointerEvent;
use slidenav_testing::NavRobot;

// With the menu open the default layer draws the content at x 243..477.
const BESIDE_CONTENT: (f32, f32) = (50.0, 300.0);
const ON_OPEN_CONTENT: (f32, f32) = (300.0, 300.0);

#[test]
fn closed_menu_routes_presses_to_content() {
    let mut robot = NavRobot::launch(|builder| builder).expect("setup");

    assert_eq!(robot.tap(50.0, 300.0), PointerRoute::Content);
    assert!(!robot.nav().click_consumer().is_visible());
}

#[test]
fn closed_menu_swallows_presses_outside_content() {
    let robot = NavRobot::launch(|builder| builder).expect("setup");

    let event = PointerEvent::down(500.0, 300.0, 0);
    assert_eq!(robot.nav().dispatch_pointer(&event), PointerRoute::Consumed);
    assert!(event.is_consumed());
}

#[test]
fn open_menu_receives_presses_beside_content() {
    let mut robot = NavRobot::launch(|builder| builder.with_menu_opened(true)).expect("setup");
    assert!(robot.nav().click_consumer().is_visible());

    let route = robot.tap(BESIDE_CONTENT.0, BESIDE_CONTENT.1);

    assert_eq!(route, PointerRoute::Menu);
    assert_eq!(robot.settle(), MenuState::Open);
}

#[test]
fn clickable_content_receives_taps_while_open() {
    let mut robot = NavRobot::launch(|builder| builder.with_menu_opened(true)).expect("setup");

    let route = robot.tap(ON_OPEN_CONTENT.0, ON_OPEN_CONTENT.1);

    assert_eq!(route, PointerRoute::Content);
    assert_eq!(robot.settle(), MenuState::Open);
}

#[test]
fn tap_on_unclickable_content_closes_menu() {
    let mut robot = NavRobot::launch(|builder| {
        builder
            .with_menu_opened(true)
            .with_content_clickable_when_menu_opened(false)
    })
    .expect("setup");

    assert_eq!(
        robot.press(ON_OPEN_CONTENT.0, ON_OPEN_CONTENT.1),
        PointerRoute::Consumed
    );
    assert_eq!(robot.release(), PointerRoute::Consumed);
    assert!(robot.nav().is_settling());

    assert_eq!(robot.settle(), MenuState::Closed);
    assert!(!robot.nav().click_consumer().is_visible());
}

#[test]
fn locked_open_menu_swallows_content_tap_without_closing() {
    let mut robot = NavRobot::launch(|builder| {
        builder
            .with_menu_opened(true)
            .with_menu_locked(true)
            .with_content_clickable_when_menu_opened(false)
    })
    .expect("setup");

    assert_eq!(
        robot.tap(ON_OPEN_CONTENT.0, ON_OPEN_CONTENT.1),
        PointerRoute::Consumed
    );
    assert!(!robot.nav().is_settling());

    assert_eq!(robot.settle(), MenuState::Open);
    assert_eq!(robot.nav().drag_progress(), 1.0);
}

#[test]
fn second_pointer_does_not_steal_the_pending_close() {
    let mut robot = NavRobot::launch(|builder| {
        builder
            .with_menu_opened(true)
            .with_content_clickable_when_menu_opened(false)
    })
    .expect("setup");
    let nav = robot.nav().clone();
    let (cx, cy) = ON_OPEN_CONTENT;
    let (mx, my) = BESIDE_CONTENT;

    assert_eq!(
        nav.dispatch_pointer(&PointerEvent::down(cx, cy, 0).with_id(1)),
        PointerRoute::Consumed
    );
    assert_eq!(
        nav.dispatch_pointer(&PointerEvent::down(mx, my, 10).with_id(2)),
        PointerRoute::Menu
    );
    assert_eq!(
        nav.dispatch_pointer(&PointerEvent::up(mx, my, 20).with_id(2)),
        PointerRoute::Menu
    );
    assert!(!nav.is_settling());

    assert_eq!(
        nav.dispatch_pointer(&PointerEvent::up(cx, cy, 30).with_id(1)),
        PointerRoute::Consumed
    );
    assert!(nav.is_settling());
    assert_eq!(robot.settle(), MenuState::Closed);
}

#[test]
fn dragging_the_content_consumes_the_gesture() {
    let mut robot = NavRobot::launch(|builder| builder.with_menu_opened(true)).expect("setup");

    assert_eq!(robot.press(300.0, 300.0), PointerRoute::Content);
    assert_eq!(robot.move_to(200.0, 300.0), PointerRoute::Consumed);
    assert_eq!(robot.move_to(100.0, 300.0), PointerRoute::Consumed);
    assert_eq!(robot.release(), PointerRoute::Consumed);

    assert_eq!(robot.settle(), MenuState::Closed);
}

#[test]
fn consumer_follows_the_drawn_content() {
    let robot = NavRobot::launch(|builder| builder.with_menu_opened(true)).expect("setup");

    let consumer = robot.nav().click_consumer();
    assert_eq!(consumer.bounds(), robot.nav().content_visual_bounds());
    assert!(consumer.bounds().x > 200.0);
}
