//! Static asset file system with a live on-disk overlay.
//!
//! Serves a flat set of named assets (scripts, stylesheets, markup) through
//! one [`AssetStore`] interface, from either of two backends:
//!
//! - [`CompiledStore`] — gzip blobs embedded in the binary at build time,
//!   decompressed on every open.
//! - [`OverlayStore`] — a directory on disk, read as-is. Meant for
//!   development, so edits show up without rebuilding the table.
//!
//! [`AssetFs`] picks between them on every call: the overlay wins whenever
//! its directory is configured and currently exists.
//!
//! ```ignore
//! let config = AssetConfig::from_env();
//! let assets = AssetFs::from_config(CompiledStore::from_table(SAMPLE_ASSETS), &config);
//!
//! let mut handle = assets.open("/layout.html")?;
//! let info = handle.stat()?;
//! let mut body = Vec::with_capacity(info.size as usize);
//! handle.read_to_end(&mut body)?;
//! handle.close();
//! ```
//!
//! # Handles
//!
//! Every open returns an [`AssetHandle`] implementing [`std::io::Read`] and
//! [`std::io::Seek`]. Compiled handles are memory-resident and keep working
//! after [`close`](AssetHandle::close); overlay handles release their file
//! descriptor on close and fail any later read.

mod compiled;
mod config;
mod error;
mod fs;
mod handle;
pub mod name;
mod overlay;
pub mod sample;
mod store;

pub use compiled::CompiledStore;
pub use config::{AssetConfig, OVERLAY_ENV};
pub use error::AssetError;
pub use fs::{AssetFs, Backend};
pub use handle::{AssetHandle, AssetInfo, COMPILED_MODE, MemoryAsset, OverlayAsset};
pub use overlay::OverlayStore;
pub use store::AssetStore;
