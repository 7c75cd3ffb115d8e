use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use super::{Catalog, City};

/// Errors that can occur when building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one city")]
    Empty,

    #[error("City at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("City id '{id}' appears more than once")]
    DuplicateId { id: String },

    #[error("City id '{id}' must not contain '/' or whitespace")]
    InvalidId { id: String },

    #[error("City '{id}' has a {field} that is not an absolute URL")]
    InvalidUrl { id: String, field: &'static str },

    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cities: Vec<City>,
}

impl Catalog {
    /// Load a catalog from a TOML file of `[[cities]]` tables.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: CatalogFile = toml::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = Catalog::new(file.cities)?;
        info!(path = %path.display(), cities = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}
