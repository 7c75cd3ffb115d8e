//! Drawer event wiring.
//!
//! A drawer selection produces two independent effects: close the overlay
//! and navigate. The host applies each one; neither waits on the other.

use tracing::warn;

use crate::catalog::Catalog;
use crate::nav::route::{InfoKind, Route};
use crate::nav::selection::SelectionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerEffect {
    Close,
    Navigate(Route),
}

/// Receiver of drawer effects.
pub trait DrawerHost {
    fn close_drawer(&mut self);
    fn navigate(&mut self, route: Route);
}

/// A city row was picked. Unknown ids still close the drawer.
pub fn select_city(catalog: &Catalog, id: &str) -> Vec<DrawerEffect> {
    if !catalog.contains(id) {
        warn!(city = id, "drawer selected a city outside the catalog");
        return vec![DrawerEffect::Close];
    }
    vec![
        DrawerEffect::Close,
        DrawerEffect::Navigate(Route::CityDetail(id.to_string())),
    ]
}

/// An info shortcut was picked; targets the currently selected city.
pub fn select_info(selection: &SelectionState, kind: InfoKind) -> Vec<DrawerEffect> {
    vec![
        DrawerEffect::Close,
        DrawerEffect::Navigate(Route::CityInfo(selection.city_id().to_string(), kind)),
    ]
}

pub fn dispatch<H: DrawerHost + ?Sized>(effects: Vec<DrawerEffect>, host: &mut H) {
    for effect in effects {
        match effect {
            DrawerEffect::Close => host.close_drawer(),
            DrawerEffect::Navigate(route) => host.navigate(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_city_closes_then_navigates() {
        let catalog = Catalog::builtin();
        assert_eq!(
            select_city(&catalog, "paris"),
            vec![
                DrawerEffect::Close,
                DrawerEffect::Navigate(Route::CityDetail("paris".to_string())),
            ]
        );
    }

    #[test]
    fn unknown_city_only_closes() {
        let catalog = Catalog::builtin();
        assert_eq!(select_city(&catalog, "atlantis"), vec![DrawerEffect::Close]);
    }

    #[test]
    fn select_info_uses_current_selection() {
        let selection = SelectionState::new(&Catalog::builtin());
        let effects = select_info(&selection, InfoKind::Photos);
        assert_eq!(
            effects[1],
            DrawerEffect::Navigate(Route::CityInfo("barcelona".to_string(), InfoKind::Photos))
        );
    }
}
