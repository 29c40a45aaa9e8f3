use super::*;

#[test]
fn starts_on_dashboard_with_closed_menu() {
    let app = SampleApp::launch(Density::BASELINE, None).expect("launch");

    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.visible_screen_tag().as_deref(), Some("screen:Dashboard"));
    assert!(app.nav().is_menu_closed());
    assert_eq!(app.icon().arrow_progress(), 0.0);
}

#[test]
fn picking_a_menu_item_swaps_screen_and_closes() {
    let mut app = SampleApp::launch(Density::BASELINE, None).expect("launch");
    app.nav().open_menu(false);
    assert_eq!(app.icon().arrow_progress(), 1.0);

    let route = app.tap_menu_item(Screen::Messages);

    assert_eq!(route, PointerRoute::Menu);
    assert_eq!(app.screen(), Screen::Messages);
    assert_eq!(app.visible_screen_tag().as_deref(), Some("screen:Messages"));
    assert!(app.nav().is_settling());

    app.run_until_idle();
    assert!(app.nav().is_menu_closed());
    assert_eq!(app.icon().arrow_progress(), 0.0);
}

#[test]
fn hidden_menu_items_cannot_be_tapped() {
    let mut app = SampleApp::launch(Density::BASELINE, None).expect("launch");

    let route = app.tap_menu_item(Screen::Chart);

    assert_eq!(route, PointerRoute::Content);
    assert_eq!(app.screen(), Screen::Dashboard);
}

#[test]
fn tapping_content_while_open_closes_menu() {
    let mut app = SampleApp::launch(Density::BASELINE, None).expect("launch");
    app.nav().open_menu(false);

    let center = app.nav().content_visual_bounds().center();
    assert_eq!(app.tap(center.x, center.y), PointerRoute::Consumed);

    app.run_until_idle();
    assert!(app.nav().is_menu_closed());
}

#[test]
fn open_menu_survives_relaunch() {
    let app = SampleApp::launch(Density::BASELINE, None).expect("launch");
    app.nav().open_menu(false);
    let saved = app.save();

    let relaunched = SampleApp::launch(Density::BASELINE, Some(saved)).expect("relaunch");

    assert!(relaunched.nav().is_menu_opened());
    assert_eq!(relaunched.icon().arrow_progress(), 1.0);
}

#[test]
fn unknown_titles_fall_back_to_dashboard() {
    assert_eq!(Screen::from_title("Chart"), Screen::Chart);
    assert_eq!(Screen::from_title("Logout"), Screen::Dashboard);
}
