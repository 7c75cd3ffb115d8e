mod common;

use cityguide::catalog::{Catalog, City};
use cityguide::nav::{InfoKind, Route};
use cityguide::screen::{top_bar_title, Screen, ScreenAction, APP_TITLE};
use common::{app, app_with, city, router};
use std::sync::Arc;

#[test]
fn overview_carries_city_details() {
    let catalog = common::two_city_catalog();
    let screen = Screen::resolve(&Route::CityDetail("paris".to_string()), &catalog);
    let Screen::CityOverview { city } = screen else {
        panic!("expected overview");
    };
    assert_eq!(city.description, "About Paris");
    assert_eq!(city.highlights, vec!["Old town".to_string()]);
}

#[test]
fn profile_shows_description_under_heading() {
    let catalog = common::two_city_catalog();
    let route = Route::CityInfo("barcelona".to_string(), InfoKind::Profile);
    let screen = Screen::resolve(&route, &catalog);
    assert_eq!(screen.heading(), "Barcelona - Profile");
    assert!(matches!(screen, Screen::Profile { city } if city.description == "About Barcelona"));
}

#[test]
fn empty_photo_sequence_renders_zero_items() {
    let bare = City {
        photos: Vec::new(),
        ..city("oslo", "Oslo")
    };
    let catalog = Arc::new(Catalog::new(vec![bare]).unwrap());
    let (mut app, _) = app_with(catalog);

    app.navigate_path("/city/oslo/photos");
    let Screen::Photos { photos, .. } = app.screen() else {
        panic!("expected photos screen");
    };
    assert!(photos.is_empty());
    assert!(cityguide::ui::screens::photo_lines(photos, app.assets()).is_empty());
}

#[test]
fn link_screens_offer_one_open_action() {
    let catalog = common::two_city_catalog();
    let web = Screen::resolve(
        &Route::CityInfo("paris".to_string(), InfoKind::Web),
        &catalog,
    );
    assert_eq!(
        web.action(),
        Some(ScreenAction::OpenLink("https://paris.example.com".to_string()))
    );
    assert_eq!(Screen::resolve(&Route::Home, &catalog).action(), None);
}

#[test]
fn city_list_lists_catalog_in_order() {
    let catalog = common::two_city_catalog();
    let Screen::CityList { cities } = Screen::resolve(&Route::CityList, &catalog) else {
        panic!("expected city list");
    };
    let ids: Vec<&str> = cities.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["barcelona", "paris"]);
}

#[test]
fn title_follows_city_routes() {
    let mut router = router();
    assert_eq!(top_bar_title(&router), APP_TITLE);
    router.navigate("/city/paris/photos");
    assert_eq!(top_bar_title(&router), "Paris");
    router.navigate("/cities");
    assert_eq!(top_bar_title(&router), APP_TITLE);
}

#[test]
fn title_names_the_city_the_screen_shows() {
    let (mut app, _) = app();
    app.navigate_path("/city/paris/web");
    app.navigate_path("/city/barcelona");
    app.go_back();

    let shown = app.screen().city().map(|city| city.name.clone());
    assert_eq!(shown.as_deref(), Some("Paris"));
    assert_eq!(app.title(), "Paris");
}

#[test]
fn activating_city_list_row_opens_that_city() {
    let (mut app, opener) = app();
    app.navigate_path("/cities");
    app.move_down();
    app.activate();
    assert_eq!(app.router().route(), &Route::CityDetail("paris".to_string()));
    assert_eq!(app.router().selection().city_id(), "paris");
    assert!(opener.opened.borrow().is_empty());
}
