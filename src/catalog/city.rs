use serde::{Deserialize, Serialize};

/// Opaque reference to an image asset, resolved by an `AssetProvider`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One destination in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct City {
    /// Unique stable key (e.g. "barcelona").
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub best_time: String,
    /// Visiting hours summary.
    pub hours: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub photos: Vec<ImageRef>,
    pub video_url: String,
    pub web_url: String,
}
