mod common;

use cityguide::nav::{drawer, DrawerEffect, DrawerHost, InfoKind, Route};
use cityguide::screen::Screen;
use common::{app, router};

/// Records the order effects arrive in.
#[derive(Default)]
struct RecordingHost {
    calls: Vec<String>,
}

impl DrawerHost for RecordingHost {
    fn close_drawer(&mut self) {
        self.calls.push("close".to_string());
    }

    fn navigate(&mut self, route: Route) {
        self.calls.push(format!("navigate {route}"));
    }
}

#[test]
fn select_city_emits_close_and_navigate() {
    let router = router();
    let mut host = RecordingHost::default();
    drawer::dispatch(drawer::select_city(router.catalog(), "paris"), &mut host);
    assert_eq!(host.calls, vec!["close", "navigate /city/paris"]);
}

#[test]
fn select_city_outside_catalog_still_closes() {
    let router = router();
    assert_eq!(
        drawer::select_city(router.catalog(), "atlantis"),
        vec![DrawerEffect::Close]
    );
}

#[test]
fn selecting_city_updates_selection_and_closes_drawer() {
    let (mut app, _) = app();
    app.open_drawer();
    assert!(app.drawer().is_open());

    app.select_city("paris");

    assert!(!app.drawer().is_open());
    assert_eq!(app.router().selection().city_id(), "paris");
    assert_eq!(app.router().route(), &Route::CityDetail("paris".to_string()));
    assert_eq!(app.title(), "Paris");
}

#[test]
fn select_info_targets_selected_city() {
    let (mut app, _) = app();
    app.select_city("paris");
    app.open_drawer();

    app.select_info(InfoKind::Photos);

    assert!(!app.drawer().is_open());
    assert_eq!(
        app.router().route(),
        &Route::CityInfo("paris".to_string(), InfoKind::Photos)
    );
}

#[test]
fn video_shortcut_opens_video_url_exactly_once() {
    let (mut app, opener) = app();
    app.navigate_path("city/paris");
    assert_eq!(app.router().current().city_id(), Some("paris"));

    app.select_info(InfoKind::Video);
    assert_eq!(app.router().route().to_path(), "/city/paris/video");
    assert!(opener.opened.borrow().is_empty());

    app.activate();
    assert_eq!(
        *opener.opened.borrow(),
        vec!["https://video.example.com/paris".to_string()]
    );
    assert!(matches!(app.screen(), Screen::Video { .. }));
}

#[test]
fn keyboard_drawer_walk_reaches_info_shortcuts() {
    let (mut app, _) = app();
    app.toggle_drawer();
    // Two cities, then Profile.
    app.move_down();
    app.move_down();
    app.activate();
    assert_eq!(
        app.router().route(),
        &Route::CityInfo("barcelona".to_string(), InfoKind::Profile)
    );
    assert!(!app.drawer().is_open());
}

#[test]
fn escape_closes_drawer_before_going_back() {
    let (mut app, _) = app();
    app.navigate_path("/cities");
    app.open_drawer();

    app.dismiss();
    assert!(!app.drawer().is_open());
    assert_eq!(app.router().route(), &Route::CityList);

    app.dismiss();
    assert_eq!(app.router().route(), &Route::Home);
}
