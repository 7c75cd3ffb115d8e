use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, City};
use crate::nav::route::{Route, CITY_ID_PARAM};
use crate::nav::selection::SelectionState;

/// The active route together with the entity it resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentRoute<'a> {
    pub route: &'a Route,
    /// Resolved city for city routes; `None` for Home and the city list.
    pub city: Option<&'a City>,
}

impl CurrentRoute<'_> {
    pub fn city_id(&self) -> Option<&str> {
        self.city.map(|city| city.id.as_str())
    }
}

/// Navigation history plus the selection it keeps in sync.
///
/// History starts at `Home` and never becomes empty. Navigating to the
/// route already on top collapses instead of stacking. Entering any city
/// route writes the selection.
#[derive(Debug)]
pub struct Router {
    catalog: Arc<Catalog>,
    history: Vec<Route>,
    selection: SelectionState,
}

impl Router {
    pub fn new(catalog: Arc<Catalog>, selection: SelectionState) -> Self {
        Self {
            catalog,
            history: vec![Route::Home],
            selection,
        }
    }

    /// Navigate to a concrete path such as `city/paris` or `/cities`.
    ///
    /// Unparseable paths degrade to `Home`; unknown city ids fall back to
    /// the first catalog entry.
    pub fn navigate(&mut self, path: &str) -> &Route {
        let route = Route::parse(path).unwrap_or_else(|err| {
            warn!(path, error = %err, "unresolvable route, showing home");
            Route::Home
        });
        self.navigate_to(route)
    }

    /// Navigate to a route pattern such as `/city/{cityId}/photos`.
    ///
    /// A missing `cityId` parameter defaults to the first catalog entry.
    pub fn navigate_with(&mut self, pattern: &str, params: &HashMap<String, String>) -> &Route {
        let mut params = params.clone();
        if pattern.contains(&format!("{{{CITY_ID_PARAM}}}")) {
            let city_id = params.entry(CITY_ID_PARAM.to_string()).or_default();
            if city_id.is_empty() {
                *city_id = self.catalog.first().id.clone();
            }
        }

        let route = Route::parse_pattern(pattern, &params).unwrap_or_else(|err| {
            warn!(pattern, error = %err, "unresolvable route pattern, showing home");
            Route::Home
        });
        self.navigate_to(route)
    }

    pub fn navigate_to(&mut self, route: Route) -> &Route {
        let resolved = route
            .city_id()
            .map(|id| self.catalog.resolve(id).id.clone());
        let route = match resolved {
            Some(id) => route.with_city_id(&id),
            None => route,
        };

        if self.route() == &route {
            debug!(route = %route, "route already active");
        } else {
            debug!(from = %self.route(), to = %route, "navigate");
            self.history.push(route);
        }

        self.sync_selection();
        self.route()
    }

    /// Pop the active route. Returns `false` at the root.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        let left = self.history.pop();
        debug!(from = ?left, to = %self.route(), "back");
        self.sync_selection();
        true
    }

    /// Active route and its resolved city, looked up against the catalog.
    pub fn current(&self) -> CurrentRoute<'_> {
        let route = self.route();
        CurrentRoute {
            route,
            city: route.city_id().map(|id| self.catalog.resolve(id)),
        }
    }

    pub fn route(&self) -> &Route {
        // History always holds the root entry.
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn sync_selection(&mut self) {
        let Some(id) = self.route().city_id().map(str::to_owned) else {
            return;
        };
        if self.selection.select(&id) {
            info!(city = %id, "selected city");
        }
    }
}
