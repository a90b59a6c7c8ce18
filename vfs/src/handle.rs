use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::time::SystemTime;

use crate::AssetError;

/// Permission bits reported for every compiled asset.
pub const COMPILED_MODE: u32 = 0o444;

/// Metadata of an opened asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInfo {
    /// Normalized asset name.
    pub name: String,
    /// Size of the decompressed (or on-disk) content in bytes.
    pub size: u64,
    /// Build time for compiled assets, OS modification time for overlay files.
    pub modified: SystemTime,
    /// Unix permission bits.
    pub mode: u32,
    /// Always `false` for compiled assets; the store is flat.
    pub is_dir: bool,
}

/// An opened asset: sequential and random-access read, stat and close.
///
/// `Compiled` handles own their decompressed bytes, so [`close`](Self::close)
/// releases nothing and reads keep working afterwards. `Overlay` handles own
/// an OS file descriptor; closing drops it, and any later read, seek or stat
/// fails with an I/O error.
#[derive(Debug)]
pub enum AssetHandle {
    Compiled(MemoryAsset),
    Overlay(OverlayAsset),
}

impl AssetHandle {
    pub fn name(&self) -> &str {
        match self {
            AssetHandle::Compiled(asset) => &asset.name,
            AssetHandle::Overlay(asset) => &asset.name,
        }
    }

    pub fn stat(&self) -> Result<AssetInfo, AssetError> {
        match self {
            AssetHandle::Compiled(asset) => Ok(asset.stat()),
            AssetHandle::Overlay(asset) => asset.stat(),
        }
    }

    /// Release the handle. Never fails and may be called more than once.
    pub fn close(&mut self) {
        match self {
            AssetHandle::Compiled(_) => {}
            AssetHandle::Overlay(asset) => asset.close(),
        }
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, AssetHandle::Compiled(_))
    }
}

impl Read for AssetHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            AssetHandle::Compiled(asset) => asset.read(buf),
            AssetHandle::Overlay(asset) => asset.read(buf),
        }
    }
}

impl Seek for AssetHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            AssetHandle::Compiled(asset) => asset.seek(pos),
            AssetHandle::Overlay(asset) => asset.seek(pos),
        }
    }
}

/// Memory-resident asset content with a cursor.
#[derive(Debug)]
pub struct MemoryAsset {
    name: String,
    content: Cursor<Vec<u8>>,
    modified: SystemTime,
}

impl MemoryAsset {
    pub(crate) fn new(name: String, data: Vec<u8>, modified: SystemTime) -> Self {
        Self {
            name,
            content: Cursor::new(data),
            modified,
        }
    }

    fn stat(&self) -> AssetInfo {
        AssetInfo {
            name: self.name.clone(),
            size: self.content.get_ref().len() as u64,
            modified: self.modified,
            mode: COMPILED_MODE,
            is_dir: false,
        }
    }
}

impl Read for MemoryAsset {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}

impl Seek for MemoryAsset {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.content.seek(pos)
    }
}

/// A file opened from the overlay directory.
#[derive(Debug)]
pub struct OverlayAsset {
    name: String,
    file: Option<File>,
}

impl OverlayAsset {
    pub(crate) fn new(name: String, file: File) -> Self {
        Self {
            name,
            file: Some(file),
        }
    }

    fn file(&self) -> io::Result<&File> {
        self.file.as_ref().ok_or_else(|| closed(&self.name))
    }

    fn file_mut(&mut self) -> io::Result<&mut File> {
        self.file.as_mut().ok_or_else(|| closed(&self.name))
    }

    fn stat(&self) -> Result<AssetInfo, AssetError> {
        let metadata = self.file()?.metadata()?;
        Ok(AssetInfo {
            name: self.name.clone(),
            size: metadata.len(),
            modified: metadata.modified()?,
            mode: mode_bits(&metadata),
            is_dir: metadata.is_dir(),
        })
    }

    fn close(&mut self) {
        // Dropping the file releases the descriptor.
        self.file = None;
    }
}

impl Read for OverlayAsset {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file_mut()?.read(buf)
    }
}

impl Seek for OverlayAsset {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file_mut()?.seek(pos)
    }
}

fn closed(name: &str) -> io::Error {
    io::Error::other(format!("asset {name} is closed"))
}

#[cfg(unix)]
fn mode_bits(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn mode_bits(metadata: &std::fs::Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o644
    }
}
