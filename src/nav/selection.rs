//! Selection state: the single "currently viewed city" value.
//!
//! Readable by anyone holding a reference; writable only from inside the
//! `nav` module, where the router is the sole writer.

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    city_id: String,
}

impl SelectionState {
    /// Initialised to the catalog's first entry.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            city_id: catalog.first().id.clone(),
        }
    }

    pub fn city_id(&self) -> &str {
        &self.city_id
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.city_id == id
    }

    /// Returns `true` when the value changed.
    pub(super) fn select(&mut self, id: &str) -> bool {
        if self.city_id == id {
            return false;
        }
        self.city_id = id.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_city() {
        let catalog = Catalog::builtin();
        let selection = SelectionState::new(&catalog);
        assert_eq!(selection.city_id(), catalog.first().id);
    }

    #[test]
    fn select_reports_changes_only() {
        let mut selection = SelectionState::new(&Catalog::builtin());
        assert!(selection.select("paris"));
        assert!(!selection.select("paris"));
        assert!(selection.is_selected("paris"));
    }
}
