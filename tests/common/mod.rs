//! Shared test utilities and doubles.

#![allow(dead_code, unused_imports)]

use cityguide::assets::DirAssetProvider;
use cityguide::catalog::{Catalog, City, ImageRef};
use cityguide::link::{LinkError, LinkOpener};
use cityguide::nav::{Router, SelectionState};
use cityguide::ui::App;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub fn city(id: &str, name: &str) -> City {
    City {
        id: id.to_string(),
        name: name.to_string(),
        country: "Somewhere".to_string(),
        description: format!("About {name}"),
        best_time: "Spring".to_string(),
        hours: "Always".to_string(),
        highlights: vec!["Old town".to_string()],
        photos: vec![ImageRef::new(format!("{id}/1.jpg"))],
        video_url: format!("https://video.example.com/{id}"),
        web_url: format!("https://{id}.example.com"),
    }
}

/// Barcelona first, then Paris.
pub fn two_city_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![city("barcelona", "Barcelona"), city("paris", "Paris")])
            .expect("valid catalog"),
    )
}

pub fn router() -> Router {
    let catalog = two_city_catalog();
    let selection = SelectionState::new(&catalog);
    Router::new(catalog, selection)
}

/// Records every URL it is asked to open.
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

pub fn app_with(catalog: Arc<Catalog>) -> (App, RecordingOpener) {
    let opener = RecordingOpener::default();
    let app = App::new(
        catalog,
        Box::new(opener.clone()),
        Box::new(DirAssetProvider::default()),
    );
    (app, opener)
}

pub fn app() -> (App, RecordingOpener) {
    app_with(two_city_catalog())
}
