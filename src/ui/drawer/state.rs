//! State for the navigation drawer overlay.

use crate::nav::InfoKind;
use crate::ui::mvi::UiState;

/// What a drawer row stands for.
///
/// Rows are laid out as every catalog city in order, followed by the four
/// info shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEntry {
    /// Index into the catalog.
    City(usize),
    Info(InfoKind),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open {
        cursor: usize,
        entries: usize,
    },
}

impl UiState for DrawerState {}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::Open { cursor, .. } => Some(*cursor),
            Self::Closed => None,
        }
    }

    /// Number of drawer rows for a catalog of `city_count` cities.
    pub fn entry_count(city_count: usize) -> usize {
        city_count + InfoKind::ALL.len()
    }

    /// Row under the cursor, if the drawer is open.
    pub fn selected_entry(&self, city_count: usize) -> Option<DrawerEntry> {
        let cursor = self.cursor()?;
        if cursor < city_count {
            return Some(DrawerEntry::City(cursor));
        }
        InfoKind::ALL
            .get(cursor - city_count)
            .copied()
            .map(DrawerEntry::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_default() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
        assert!(!DrawerState::Closed.is_open());
    }

    #[test]
    fn entries_map_cities_then_info() {
        let open = |cursor| DrawerState::Open {
            cursor,
            entries: DrawerState::entry_count(2),
        };
        assert_eq!(open(1).selected_entry(2), Some(DrawerEntry::City(1)));
        assert_eq!(
            open(2).selected_entry(2),
            Some(DrawerEntry::Info(InfoKind::Profile))
        );
        assert_eq!(
            open(5).selected_entry(2),
            Some(DrawerEntry::Info(InfoKind::Web))
        );
        assert_eq!(open(6).selected_entry(2), None);
        assert_eq!(DrawerState::Closed.selected_entry(2), None);
    }
}
