//! Test assets: an `AssetLocator` over a fixed set of references.

use std::collections::HashSet;

use vnengine_core::assets::AssetLocator;

/// Treats exactly the given references as existing assets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    references: HashSet<String>,
}

impl InMemoryAssets {
    /// Create a locator that knows `references`.
    #[must_use]
    pub fn new<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            references: references.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetLocator for InMemoryAssets {
    fn exists(&self, reference: &str) -> bool {
        self.references.contains(reference)
    }
}
