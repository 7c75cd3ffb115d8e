//! Image asset lookup for photo references.

use std::path::PathBuf;

use tracing::warn;

use crate::catalog::ImageRef;

/// What the provider knows about one image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Available(PathBuf),
    Missing,
    /// No asset directory configured.
    Unresolved,
}

pub trait AssetProvider {
    fn lookup(&self, image: &ImageRef) -> AssetStatus;
}

/// Resolves references relative to an optional base directory.
#[derive(Debug, Clone, Default)]
pub struct DirAssetProvider {
    base: Option<PathBuf>,
}

impl DirAssetProvider {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }
}

impl AssetProvider for DirAssetProvider {
    fn lookup(&self, image: &ImageRef) -> AssetStatus {
        let Some(base) = &self.base else {
            return AssetStatus::Unresolved;
        };
        let path = base.join(image.as_str());
        if path.is_file() {
            AssetStatus::Available(path)
        } else {
            warn!(image = image.as_str(), "missing image asset");
            AssetStatus::Missing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_base_everything_is_unresolved() {
        let provider = DirAssetProvider::default();
        assert_eq!(
            provider.lookup(&ImageRef::new("paris/eiffel.jpg")),
            AssetStatus::Unresolved
        );
    }

    #[test]
    fn finds_files_under_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("paris")).unwrap();
        std::fs::write(dir.path().join("paris/eiffel.jpg"), b"jpg").unwrap();

        let provider = DirAssetProvider::new(Some(dir.path().to_path_buf()));
        assert!(matches!(
            provider.lookup(&ImageRef::new("paris/eiffel.jpg")),
            AssetStatus::Available(_)
        ));
        assert_eq!(
            provider.lookup(&ImageRef::new("paris/louvre.jpg")),
            AssetStatus::Missing
        );
    }
}
