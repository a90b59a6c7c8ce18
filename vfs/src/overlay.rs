use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AssetError;
use crate::handle::{AssetHandle, OverlayAsset};
use crate::name::{self, DEFAULT_DOCUMENT};
use crate::store::AssetStore;

/// Development store that serves files straight from a directory on disk.
///
/// Content is assumed to already be in final form, so nothing is
/// decompressed. Nothing is cached either: every open and every listing
/// goes to the filesystem, which is what makes live editing work.
///
/// Checking and opening are not atomic with respect to other processes
/// touching the directory. A file removed in between simply fails the open.
pub struct OverlayStore {
    root: PathBuf,
    default_document: String,
}

impl OverlayStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is checked on access.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_document: DEFAULT_DOCUMENT.to_owned(),
        }
    }

    /// Set the name served for `""` and `"/"`.
    pub fn with_default_document(mut self, name: impl Into<String>) -> Self {
        self.default_document = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("skipping non UTF-8 overlay entry {raw:?}"),
            }
        }
        Ok(names)
    }
}

impl AssetStore for OverlayStore {
    fn open(&self, raw_name: &str) -> Result<AssetHandle, AssetError> {
        let name = name::normalize(raw_name, &self.default_document)?;
        let full_path = self.resolve(&name);
        log::debug!("overlay open {name:?} -> {}", full_path.display());

        match File::open(&full_path) {
            Ok(file) => Ok(AssetHandle::Overlay(OverlayAsset::new(name, file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(AssetError::NotFound(name)),
            Err(err) => Err(AssetError::Filesystem(err)),
        }
    }

    /// Immediate entries of the root directory, read fresh on every call.
    ///
    /// A listing failure is logged and yields an empty list; opening by
    /// exact name is unaffected.
    fn list_names(&self) -> Vec<String> {
        match self.read_names() {
            Ok(names) => names,
            Err(err) => {
                log::warn!(
                    "failed to list overlay directory {}: {err}",
                    self.root.display()
                );
                Vec::new()
            }
        }
    }
}
