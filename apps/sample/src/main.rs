use slidenav_sample::{SampleApp, Screen};
use slidenav_ui_graphics::Density;

fn main() {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Slidenav Sample ===");
    println!("Scripted session: toggle, pick screens, drag, rotate.");
    println!();

    let mut app = match SampleApp::launch(Density(2.0), None) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("setup failed: {err}");
            std::process::exit(1);
        }
    };

    app.press_toolbar_toggle();
    app.run_until_idle();
    report(&app, "toolbar toggle");

    app.tap_menu_item(Screen::Messages);
    app.run_until_idle();
    report(&app, "picked Messages");

    app.drag((20.0, 320.0), (320.0, 320.0), 12);
    app.run_until_idle();
    report(&app, "dragged open");

    app.tap_menu_item(Screen::Chart);
    app.run_until_idle();
    report(&app, "picked Chart");

    app.press_toolbar_toggle();
    app.run_until_idle();
    let saved = app.save();
    drop(app);

    let mut app = match SampleApp::launch(Density(2.0), Some(saved)) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("relaunch failed: {err}");
            std::process::exit(1);
        }
    };
    report(&app, "after rotation");

    let content = app.nav().content_visual_bounds().center();
    app.tap(content.x, content.y);
    app.run_until_idle();
    report(&app, "tapped content");
}

fn report(app: &SampleApp, step: &str) {
    println!(
        "{:<16} screen={:<11} state={:?} progress={:.2} icon={:.2}",
        step,
        app.screen().title(),
        app.nav().menu_state(),
        app.nav().drag_progress(),
        app.icon().arrow_progress()
    );
}
