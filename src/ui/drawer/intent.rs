//! Intents for the navigation drawer overlay.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DrawerIntent {
    /// Show the overlay with `entries` rows and the cursor on `cursor`.
    Open { entries: usize, cursor: usize },
    Close,
    /// Open if closed (with the given layout), close if open.
    Toggle { entries: usize, cursor: usize },
    MoveUp,
    MoveDown,
}

impl Intent for DrawerIntent {}
