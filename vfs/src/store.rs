use crate::{AssetError, AssetHandle};

/// A flat name → content asset backend.
///
/// Implemented by [`CompiledStore`](crate::CompiledStore),
/// [`OverlayStore`](crate::OverlayStore), and the selector
/// [`AssetFs`](crate::AssetFs) that switches between them.
///
/// # Name Contract
///
/// Names are normalized by every implementation: a leading slash is
/// stripped and the empty name resolves to the configured default
/// document. There are no directories, only names.
pub trait AssetStore: Send + Sync {
    /// Open an asset, returning a handle positioned at offset 0.
    fn open(&self, name: &str) -> Result<AssetHandle, AssetError>;

    /// Every asset name currently served by this store, in no particular order.
    fn list_names(&self) -> Vec<String>;
}
