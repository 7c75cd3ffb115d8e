use std::sync::Arc;

use crate::assets::AssetProvider;
use crate::catalog::Catalog;
use crate::link::{self, LinkOpener};
use crate::nav::{drawer, DrawerHost, InfoKind, Route, Router, SelectionState};
use crate::screen::{self, Screen};
use crate::ui::drawer::{DrawerEntry, DrawerIntent, DrawerReducer, DrawerState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Everything the event loop mutates, owned in one place.
///
/// The router owns the selection state; the drawer reads it through the
/// router and writes it only by navigating.
pub struct App {
    should_quit: bool,
    router: Router,
    /// Drawer overlay state (MVI pattern).
    drawer: DrawerState,
    /// Cursor on the city list screen.
    list_cursor: usize,
    opener: Box<dyn LinkOpener>,
    assets: Box<dyn AssetProvider>,
}

impl App {
    pub fn new(
        catalog: Arc<Catalog>,
        opener: Box<dyn LinkOpener>,
        assets: Box<dyn AssetProvider>,
    ) -> Self {
        let selection = SelectionState::new(&catalog);
        Self {
            should_quit: false,
            router: Router::new(catalog, selection),
            drawer: DrawerState::default(),
            list_cursor: 0,
            opener,
            assets,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn drawer(&self) -> &DrawerState {
        &self.drawer
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn assets(&self) -> &dyn AssetProvider {
        self.assets.as_ref()
    }

    /// Screen for the active route.
    pub fn screen(&self) -> Screen<'_> {
        Screen::resolve(self.router.route(), self.router.catalog())
    }

    pub fn title(&self) -> String {
        screen::top_bar_title(&self.router)
    }

    pub fn navigate_path(&mut self, path: &str) {
        self.router.navigate(path);
        self.sync_list_cursor();
    }

    pub fn go_back(&mut self) -> bool {
        let moved = self.router.back();
        self.sync_list_cursor();
        moved
    }

    // Drawer

    pub fn toggle_drawer(&mut self) {
        let (entries, cursor) = self.drawer_layout();
        dispatch_mvi!(self, drawer, DrawerReducer, DrawerIntent::Toggle { entries, cursor });
    }

    pub fn open_drawer(&mut self) {
        let (entries, cursor) = self.drawer_layout();
        dispatch_mvi!(self, drawer, DrawerReducer, DrawerIntent::Open { entries, cursor });
    }

    /// Drawer city row picked.
    pub fn select_city(&mut self, id: &str) {
        let effects = drawer::select_city(self.router.catalog(), id);
        drawer::dispatch(effects, self);
    }

    /// Drawer info shortcut picked; applies to the selected city.
    pub fn select_info(&mut self, kind: InfoKind) {
        let effects = drawer::select_info(self.router.selection(), kind);
        drawer::dispatch(effects, self);
    }

    // Keyboard actions

    pub fn move_up(&mut self) {
        if self.drawer.is_open() {
            dispatch_mvi!(self, drawer, DrawerReducer, DrawerIntent::MoveUp);
        } else if self.router.route() == &Route::CityList {
            let len = self.router.catalog().len();
            self.list_cursor = if self.list_cursor == 0 {
                len.saturating_sub(1)
            } else {
                self.list_cursor - 1
            };
        }
    }

    pub fn move_down(&mut self) {
        if self.drawer.is_open() {
            dispatch_mvi!(self, drawer, DrawerReducer, DrawerIntent::MoveDown);
        } else if self.router.route() == &Route::CityList {
            let len = self.router.catalog().len();
            self.list_cursor = if self.list_cursor + 1 >= len {
                0
            } else {
                self.list_cursor + 1
            };
        }
    }

    /// Enter: pick the drawer row, open the highlighted city, or run the
    /// screen's action.
    pub fn activate(&mut self) {
        if self.drawer.is_open() {
            let city_count = self.router.catalog().len();
            match self.drawer.selected_entry(city_count) {
                Some(DrawerEntry::City(index)) => {
                    if let Some(city) = self.router.catalog().cities().get(index) {
                        let id = city.id.clone();
                        self.select_city(&id);
                    }
                }
                Some(DrawerEntry::Info(kind)) => self.select_info(kind),
                None => self.close_drawer(),
            }
            return;
        }

        if self.router.route() == &Route::CityList {
            if let Some(city) = self.router.catalog().cities().get(self.list_cursor) {
                let route = Route::CityDetail(city.id.clone());
                self.router.navigate_to(route);
            }
            return;
        }

        let action = self.screen().action();
        if let Some(action) = action {
            link::perform(&action, self.opener.as_mut());
        }
    }

    /// Esc: close the drawer if open, otherwise go back.
    pub fn dismiss(&mut self) {
        if self.drawer.is_open() {
            self.close_drawer();
        } else {
            self.go_back();
        }
    }

    /// Drawer row count and the row of the selected city.
    fn drawer_layout(&self) -> (usize, usize) {
        let catalog = self.router.catalog();
        let entries = DrawerState::entry_count(catalog.len());
        let cursor = catalog
            .position(self.router.selection().city_id())
            .unwrap_or(0);
        (entries, cursor)
    }

    /// Keep the list cursor on the selected city when arriving at the list.
    fn sync_list_cursor(&mut self) {
        if self.router.route() == &Route::CityList {
            self.list_cursor = self
                .router
                .catalog()
                .position(self.router.selection().city_id())
                .unwrap_or(0);
        }
    }
}

impl DrawerHost for App {
    fn close_drawer(&mut self) {
        dispatch_mvi!(self, drawer, DrawerReducer, DrawerIntent::Close);
    }

    fn navigate(&mut self, route: Route) {
        self.router.navigate_to(route);
        self.sync_list_cursor();
    }
}
