use std::path::{Path, PathBuf};

/// Illustration attached to a word pair.
///
/// This is only a handle: the bytes live wherever `path` points and are
/// loaded by whoever renders the card. Entries share it through `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageAsset {
    name: String,
    path: PathBuf,
}

impl ImageAsset {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
