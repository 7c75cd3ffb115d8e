//! City catalog: the static, ordered collection of destinations.
//!
//! The catalog is built once at startup (built-in sample data or a TOML
//! file) and is read-only afterwards. Every lookup by id either resolves to
//! exactly one city or falls back to the first entry.

mod city;
mod loader;
mod sample;

pub use city::{City, ImageRef};
pub use loader::CatalogError;

use tracing::warn;
use url::Url;

/// Immutable ordered list of cities, uniquely keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    cities: Vec<City>,
}

impl Catalog {
    /// Build a catalog.
    ///
    /// Rejects empty lists, ids that are blank, duplicated or not usable as
    /// a single route segment, and link fields that are not absolute URLs.
    pub fn new(cities: Vec<City>) -> Result<Self, CatalogError> {
        if cities.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, city) in cities.iter().enumerate() {
            if city.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if city.id.contains('/') || city.id.chars().any(char::is_whitespace) {
                return Err(CatalogError::InvalidId {
                    id: city.id.clone(),
                });
            }
            if cities[..index].iter().any(|other| other.id == city.id) {
                return Err(CatalogError::DuplicateId {
                    id: city.id.clone(),
                });
            }
            check_link(city, "video_url", &city.video_url)?;
            check_link(city, "web_url", &city.web_url)?;
        }

        Ok(Self { cities })
    }

    /// The compiled-in sample catalog.
    pub fn builtin() -> Self {
        Self {
            cities: sample::sample_cities(),
        }
    }

    /// First entry; the fallback target for unresolvable ids.
    pub fn first(&self) -> &City {
        // Non-empty is guaranteed by every constructor.
        &self.cities[0]
    }

    pub fn get(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Resolve an id, falling back to the first entry when it is unknown.
    pub fn resolve(&self, id: &str) -> &City {
        match self.get(id) {
            Some(city) => city,
            None => {
                let fallback = self.first();
                warn!(
                    requested = id,
                    fallback = %fallback.id,
                    "unknown city id, using first catalog entry"
                );
                fallback
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Position of a city in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.cities.iter().position(|city| city.id == id)
    }
}

/// Absolute URL with a host and no surrounding whitespace.
fn check_link(city: &City, field: &'static str, value: &str) -> Result<(), CatalogError> {
    match Url::parse(value) {
        Ok(url) if url.has_host() && value.trim() == value => Ok(()),
        _ => Err(CatalogError::InvalidUrl {
            id: city.id.clone(),
            field,
        }),
    }
}
