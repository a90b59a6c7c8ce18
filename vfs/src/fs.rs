use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::compiled::CompiledStore;
use crate::config::AssetConfig;
use crate::error::AssetError;
use crate::handle::AssetHandle;
use crate::overlay::OverlayStore;
use crate::store::AssetStore;

/// Asset file system that picks its backend on every call.
///
/// If an overlay directory is configured and currently exists as a
/// directory, requests go to an [`OverlayStore`] rooted there. Otherwise
/// they go to the [`CompiledStore`]. The decision is never cached, so
/// creating or removing the overlay directory while the process runs takes
/// effect on the next call.
///
/// `Clone` is cheap (Arc internals). Thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// let assets = AssetFs::new(CompiledStore::from_table(SAMPLE_ASSETS))
///     .with_overlay("./static");
///
/// // Served from ./static/a.js while that directory exists,
/// // from the compiled table otherwise.
/// let bytes = assets.read("/a.js")?;
/// ```
#[derive(Clone)]
pub struct AssetFs {
    inner: Arc<AssetFsInner>,
}

struct AssetFsInner {
    compiled: CompiledStore,
    overlay: RwLock<Option<PathBuf>>,
}

/// The backend chosen for a single call.
pub enum Backend<'a> {
    Compiled(&'a CompiledStore),
    Overlay(OverlayStore),
}

impl Backend<'_> {
    pub fn is_overlay(&self) -> bool {
        matches!(self, Backend::Overlay(_))
    }

    fn store(&self) -> &dyn AssetStore {
        match self {
            Backend::Compiled(store) => *store,
            Backend::Overlay(store) => store,
        }
    }
}

impl AssetFs {
    /// Serve from `compiled`, with no overlay configured.
    pub fn new(compiled: CompiledStore) -> Self {
        Self {
            inner: Arc::new(AssetFsInner {
                compiled,
                overlay: RwLock::new(None),
            }),
        }
    }

    /// Build from a config: default document and optional overlay path.
    pub fn from_config(compiled: CompiledStore, config: &AssetConfig) -> Self {
        let compiled = compiled.with_default_document(config.default_document.clone());
        let fs = Self::new(compiled);
        fs.set_overlay(config.overlay.clone());
        fs
    }

    /// Configure the overlay directory. It does not need to exist yet.
    pub fn with_overlay(self, root: impl Into<PathBuf>) -> Self {
        self.set_overlay(Some(root.into()));
        self
    }

    /// Re-point (or clear) the overlay directory. Visible to all clones.
    pub fn set_overlay(&self, root: Option<PathBuf>) {
        match &root {
            Some(path) => log::info!("asset overlay set to {}", path.display()),
            None => log::info!("asset overlay cleared"),
        }
        *self.inner.overlay.write() = root;
    }

    pub fn overlay(&self) -> Option<PathBuf> {
        self.inner.overlay.read().clone()
    }

    pub fn compiled(&self) -> &CompiledStore {
        &self.inner.compiled
    }

    /// Decide which backend serves the current call.
    ///
    /// Stats the overlay path each time it is called.
    pub fn backend(&self) -> Backend<'_> {
        let overlay = self.inner.overlay.read().clone();
        if let Some(root) = overlay
            && root.is_dir()
        {
            log::trace!("asset backend: overlay {}", root.display());
            let store = OverlayStore::new(root)
                .with_default_document(self.inner.compiled.default_document());
            return Backend::Overlay(store);
        }
        log::trace!("asset backend: compiled");
        Backend::Compiled(&self.inner.compiled)
    }

    /// Read the entire contents of an asset.
    pub fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let mut handle = self.open(name)?;
        let mut data = Vec::new();
        let result = handle.read_to_end(&mut data);
        handle.close();
        result?;
        Ok(data)
    }
}

impl AssetStore for AssetFs {
    fn open(&self, name: &str) -> Result<AssetHandle, AssetError> {
        self.backend().store().open(name)
    }

    fn list_names(&self) -> Vec<String> {
        self.backend().store().list_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_ASSETS;
    use std::collections::HashSet;

    fn sample_fs() -> AssetFs {
        AssetFs::new(CompiledStore::from_table(SAMPLE_ASSETS))
    }

    #[test]
    fn compiled_without_overlay() {
        let fs = sample_fs();
        assert!(!fs.backend().is_overlay());
        let handle = fs.open("a.js").unwrap();
        assert!(handle.is_compiled());
    }

    #[test]
    fn missing_overlay_dir_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = sample_fs().with_overlay(dir.path().join("not-there"));
        assert!(!fs.backend().is_overlay());
        assert!(fs.read("a.js").unwrap().starts_with(b"function helloWorld"));
    }

    #[test]
    fn overlay_path_to_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain-file");
        std::fs::write(&file, b"").unwrap();

        let fs = sample_fs().with_overlay(file);
        assert!(!fs.backend().is_overlay());
    }

    #[test]
    fn existing_overlay_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.js"), b"overlay").unwrap();

        let fs = sample_fs().with_overlay(dir.path());
        assert!(fs.backend().is_overlay());
        assert_eq!(fs.read("/a.js").unwrap(), b"overlay");
    }

    #[test]
    fn overlay_miss_does_not_fall_through_to_compiled() {
        let dir = tempfile::tempdir().unwrap();
        let fs = sample_fs().with_overlay(dir.path());
        assert!(fs.read("a.js").unwrap_err().is_not_found());
    }

    #[test]
    fn absent_everywhere_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fs = sample_fs();
        assert!(fs.read("missing.js").unwrap_err().is_not_found());

        fs.set_overlay(Some(dir.path().to_path_buf()));
        assert!(fs.read("missing.js").unwrap_err().is_not_found());
    }

    #[test]
    fn parent_segments_are_not_found_on_both_backends() {
        let dir = tempfile::tempdir().unwrap();
        let fs = sample_fs();
        let err = fs.open("static/../missing.js").unwrap_err();
        assert!(err.is_not_found());
        assert!(fs.open("../a.js").unwrap_err().is_not_found());

        fs.set_overlay(Some(dir.path().to_path_buf()));
        assert!(fs.backend().is_overlay());
        let err = fs.open("static/../missing.js").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn compiled_store_is_reachable() {
        let fs = sample_fs();
        assert_eq!(fs.compiled().len(), 3);
        assert!(!fs.compiled().is_empty());
        assert_eq!(fs.compiled().default_document(), "index.html");
    }

    #[test]
    fn list_names_follows_backend() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("only-on-disk.txt"), b"").unwrap();

        let fs = sample_fs();
        let compiled: HashSet<String> = fs.list_names().into_iter().collect();
        assert_eq!(compiled.len(), 3);
        assert!(compiled.contains("layout.html"));

        fs.set_overlay(Some(dir.path().to_path_buf()));
        assert_eq!(fs.list_names(), vec!["only-on-disk.txt".to_string()]);
    }

    #[test]
    fn default_document_reaches_overlay() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("layout.html"), b"disk layout").unwrap();

        let config = AssetConfig {
            overlay: Some(dir.path().to_path_buf()),
            default_document: "layout.html".into(),
        };
        let fs = AssetFs::from_config(CompiledStore::from_table(SAMPLE_ASSETS), &config);
        assert_eq!(fs.read("").unwrap(), b"disk layout");

        fs.set_overlay(None);
        assert_eq!(fs.read("/").unwrap().len(), 244);
    }

    #[test]
    fn clones_share_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let fs = sample_fs();
        let clone = fs.clone();

        fs.set_overlay(Some(dir.path().to_path_buf()));
        assert!(clone.backend().is_overlay());
        assert_eq!(clone.overlay().as_deref(), Some(dir.path()));
    }
}
