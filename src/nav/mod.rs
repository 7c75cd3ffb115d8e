//! Navigation model: routes, router, selection state and drawer wiring.

pub mod drawer;
mod route;
mod router;
mod selection;

pub use drawer::{DrawerEffect, DrawerHost};
pub use route::{InfoKind, Route, RouteError, CITY_ID_PARAM};
pub use router::{CurrentRoute, Router};
pub use selection::SelectionState;
