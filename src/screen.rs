//! Screen resolution: one screen descriptor per route variant.

use crate::catalog::{Catalog, City, ImageRef};
use crate::nav::{InfoKind, Route, Router};

/// Top bar title outside city routes.
pub const APP_TITLE: &str = "Travel Guide";

/// Resolved screen plus the data it renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Home,
    CityList { cities: &'a [City] },
    CityOverview { city: &'a City },
    Profile { city: &'a City },
    Photos { city: &'a City, photos: &'a [ImageRef] },
    Video { city: &'a City, url: &'a str },
    Web { city: &'a City, url: &'a str },
}

/// Something the user can trigger from a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    OpenLink(String),
}

impl<'a> Screen<'a> {
    /// City ids are resolved here, against the catalog, at render time.
    pub fn resolve(route: &Route, catalog: &'a Catalog) -> Screen<'a> {
        match route {
            Route::Home => Screen::Home,
            Route::CityList => Screen::CityList {
                cities: catalog.cities(),
            },
            Route::CityDetail(id) => Screen::CityOverview {
                city: catalog.resolve(id),
            },
            Route::CityInfo(id, kind) => {
                let city = catalog.resolve(id);
                match kind {
                    InfoKind::Profile => Screen::Profile { city },
                    InfoKind::Photos => Screen::Photos {
                        city,
                        photos: &city.photos,
                    },
                    InfoKind::Video => Screen::Video {
                        city,
                        url: &city.video_url,
                    },
                    InfoKind::Web => Screen::Web {
                        city,
                        url: &city.web_url,
                    },
                }
            }
        }
    }

    pub fn city(&self) -> Option<&'a City> {
        match *self {
            Screen::Home | Screen::CityList { .. } => None,
            Screen::CityOverview { city }
            | Screen::Profile { city }
            | Screen::Photos { city, .. }
            | Screen::Video { city, .. }
            | Screen::Web { city, .. } => Some(city),
        }
    }

    pub fn heading(&self) -> String {
        match self {
            Screen::Home => "Welcome to the Travel Guide".to_string(),
            Screen::CityList { .. } => "Cities".to_string(),
            Screen::CityOverview { city } => city.name.clone(),
            Screen::Profile { city } => format!("{} - Profile", city.name),
            Screen::Photos { city, .. } => format!("{} - Photos", city.name),
            Screen::Video { city, .. } => format!("{} - Video", city.name),
            Screen::Web { city, .. } => format!("{} - Web", city.name),
        }
    }

    /// The single action offered by link screens.
    pub fn action(&self) -> Option<ScreenAction> {
        match self {
            Screen::Video { url, .. } | Screen::Web { url, .. } => {
                Some(ScreenAction::OpenLink(url.to_string()))
            }
            _ => None,
        }
    }
}

/// City name on city routes, the application title elsewhere.
pub fn top_bar_title(router: &Router) -> String {
    match router.current().city {
        Some(city) => city.name.clone(),
        None => APP_TITLE.to_string(),
    }
}
