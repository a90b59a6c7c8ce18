use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Read;
use std::time::SystemTime;

use flate2::read::GzDecoder;

use crate::error::AssetError;
use crate::handle::{AssetHandle, MemoryAsset};
use crate::name::{self, DEFAULT_DOCUMENT};
use crate::store::AssetStore;

/// Immutable table of gzip-compressed assets embedded in the binary.
///
/// Built once at startup and never mutated afterwards, so concurrent opens
/// need no locking. Every [`open`](AssetStore::open) decompresses its blob
/// into a fresh buffer; handles share nothing with each other.
///
/// # Example
///
/// ```ignore
/// static TABLE: &[(&str, &[u8])] = &[("a.js", include_bytes!("a.js.gz"))];
///
/// let store = CompiledStore::from_table(TABLE);
/// let handle = store.open("/a.js")?;
/// ```
pub struct CompiledStore {
    blobs: HashMap<String, Cow<'static, [u8]>>,
    default_document: String,
    built_at: SystemTime,
}

impl CompiledStore {
    /// Build a store from owned `name → gzip bytes` data.
    pub fn new(blobs: HashMap<String, Vec<u8>>) -> Self {
        Self::with_blobs(
            blobs
                .into_iter()
                .map(|(name, blob)| (name, Cow::Owned(blob)))
                .collect(),
        )
    }

    /// Build a store over a generated static table without copying the blobs.
    ///
    /// A name appearing twice keeps the last blob.
    pub fn from_table(table: &'static [(&'static str, &'static [u8])]) -> Self {
        Self::with_blobs(
            table
                .iter()
                .map(|&(name, blob)| (name.to_owned(), Cow::Borrowed(blob)))
                .collect(),
        )
    }

    fn with_blobs(blobs: HashMap<String, Cow<'static, [u8]>>) -> Self {
        log::debug!("compiled asset table: {} entries", blobs.len());
        Self {
            blobs,
            default_document: DEFAULT_DOCUMENT.to_owned(),
            built_at: SystemTime::now(),
        }
    }

    /// Set the name served for `""` and `"/"`.
    pub fn with_default_document(mut self, name: impl Into<String>) -> Self {
        self.default_document = name.into();
        self
    }

    pub fn default_document(&self) -> &str {
        &self.default_document
    }

    /// Modification time reported by every compiled handle.
    pub fn built_at(&self) -> SystemTime {
        self.built_at
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl AssetStore for CompiledStore {
    fn open(&self, raw_name: &str) -> Result<AssetHandle, AssetError> {
        let name = name::normalize(raw_name, &self.default_document)?;
        let Some(blob) = self.blobs.get(&name) else {
            return Err(AssetError::NotFound(name));
        };
        let data = decompress(&name, blob)?;
        Ok(AssetHandle::Compiled(MemoryAsset::new(
            name,
            data,
            self.built_at,
        )))
    }

    fn list_names(&self) -> Vec<String> {
        self.blobs.keys().cloned().collect()
    }
}

fn decompress(name: &str, blob: &[u8]) -> Result<Vec<u8>, AssetError> {
    let mut data = Vec::new();
    if let Err(source) = GzDecoder::new(blob).read_to_end(&mut data) {
        log::error!("compiled asset {name:?} is corrupt: {source}");
        return Err(AssetError::Decompression {
            name: name.to_owned(),
            source,
        });
    }
    Ok(data)
}
