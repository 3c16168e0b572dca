//! Asset resolution.

use std::path::{Path, PathBuf};

/// Answers whether an asset reference (an image path as written by the
/// author) resolves to something the presentation layer can load.
pub trait AssetLocator: Send + Sync {
    /// Returns `true` if `reference` resolves to an existing asset.
    fn exists(&self, reference: &str) -> bool;
}

/// Resolves references as file paths. Relative references are resolved
/// against `root`; absolute references are used as-is.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Creates a locator rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the path a reference resolves to.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl AssetLocator for DirectoryAssets {
    fn exists(&self, reference: &str) -> bool {
        self.resolve(reference).is_file()
    }
}
