mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DrawerIntent;
pub use reducer::DrawerReducer;
pub use state::{DrawerEntry, DrawerState};
pub use view::render_drawer;
