use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::model::ImageAsset;

/// Shared image handles keyed by the name used in deck files.
#[derive(Debug, Default)]
pub struct AssetCache {
    root: PathBuf,
    images: HashMap<String, Arc<ImageAsset>>,
}

impl AssetCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            images: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the handle for `name`, creating it under the asset root on first use.
    pub fn get_or_insert(&mut self, name: &str) -> Arc<ImageAsset> {
        if let Some(image) = self.images.get(name) {
            return Arc::clone(image);
        }
        let path = self.root.join(name);
        debug!(name, path = %path.display(), "registering image asset");
        let image = Arc::new(ImageAsset::new(name.to_string(), path));
        self.images.insert(name.to_string(), Arc::clone(&image));
        image
    }

    pub fn get(&self, name: &str) -> Option<Arc<ImageAsset>> {
        self.images.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
