//! Route grammar.
//!
//! ```text
//! /home
//! /cities
//! /city/{cityId}
//! /city/{cityId}/{profile|photos|video|web}
//! ```
//!
//! Routes are parsed exactly once, here, into a closed set of variants.
//! City ids are carried verbatim; the router resolves them against the
//! catalog.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Parameter name used for the city placeholder in route patterns.
pub const CITY_ID_PARAM: &str = "cityId";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route '{0}'")]
    UnknownPath(String),

    #[error("Unknown info view '{0}'")]
    UnknownInfoKind(String),

    #[error("City route without a city id")]
    MissingCityId,
}

/// One of the four fixed sub-views attached to a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    Profile,
    Photos,
    Video,
    Web,
}

impl InfoKind {
    /// Drawer order.
    pub const ALL: [InfoKind; 4] = [
        InfoKind::Profile,
        InfoKind::Photos,
        InfoKind::Video,
        InfoKind::Web,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InfoKind::Profile => "profile",
            InfoKind::Photos => "photos",
            InfoKind::Video => "video",
            InfoKind::Web => "web",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InfoKind::Profile => "Profile",
            InfoKind::Photos => "Photos",
            InfoKind::Video => "Video",
            InfoKind::Web => "Web",
        }
    }
}

impl FromStr for InfoKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(InfoKind::Profile),
            "photos" => Ok(InfoKind::Photos),
            "video" => Ok(InfoKind::Video),
            "web" => Ok(InfoKind::Web),
            other => Err(RouteError::UnknownInfoKind(other.to_string())),
        }
    }
}

impl fmt::Display for InfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    CityList,
    CityDetail(String),
    CityInfo(String, InfoKind),
}

impl Route {
    /// Parse a concrete path. A leading slash is optional.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["home"] => Ok(Route::Home),
            ["cities"] => Ok(Route::CityList),
            ["city"] => Err(RouteError::MissingCityId),
            ["city", id] => Ok(Route::CityDetail(id.to_string())),
            ["city", id, kind] => Ok(Route::CityInfo(id.to_string(), kind.parse()?)),
            _ => Err(RouteError::UnknownPath(path.to_string())),
        }
    }

    /// Expand `{name}` placeholders from `params`, then parse.
    pub fn parse_pattern(
        pattern: &str,
        params: &HashMap<String, String>,
    ) -> Result<Route, RouteError> {
        let mut expanded = Vec::new();
        for segment in pattern.split('/') {
            match placeholder(segment) {
                Some(name) => match params.get(name).filter(|value| !value.is_empty()) {
                    Some(value) => expanded.push(value.as_str()),
                    None if name == CITY_ID_PARAM => return Err(RouteError::MissingCityId),
                    None => return Err(RouteError::UnknownPath(pattern.to_string())),
                },
                None => expanded.push(segment),
            }
        }
        Route::parse(&expanded.join("/"))
    }

    /// City id carried by city routes.
    pub fn city_id(&self) -> Option<&str> {
        match self {
            Route::CityDetail(id) | Route::CityInfo(id, _) => Some(id),
            Route::Home | Route::CityList => None,
        }
    }

    /// Same variant, with the city id replaced.
    pub(crate) fn with_city_id(self, id: &str) -> Route {
        match self {
            Route::CityDetail(_) => Route::CityDetail(id.to_string()),
            Route::CityInfo(_, kind) => Route::CityInfo(id.to_string(), kind),
            other => other,
        }
    }

    pub fn to_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/home"),
            Route::CityList => f.write_str("/cities"),
            Route::CityDetail(id) => write!(f, "/city/{id}"),
            Route::CityInfo(id, kind) => write!(f, "/city/{id}/{kind}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
