use thiserror::Error;

/// Errors that can occur while opening or listing assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The requested asset is absent from the active backend.
    #[error("asset not found: {0}")]
    NotFound(String),
    /// A compiled blob failed to gzip-decode. This means the embedded table
    /// is broken, not that the caller asked for something wrong.
    #[error("failed to decompress asset {name}: {source}")]
    Decompression {
        name: String,
        #[source]
        source: std::io::Error,
    },
    /// Any other OS-level failure in overlay mode.
    #[error("filesystem error: {0}")]
    Filesystem(#[source] std::io::Error),
    /// The configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl AssetError {
    /// Whether this error should be surfaced to clients as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound(err.to_string())
        } else {
            AssetError::Filesystem(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err = AssetError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_not_found());
    }

    #[test]
    fn other_io_maps_to_filesystem() {
        let err = AssetError::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(matches!(err, AssetError::Filesystem(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn decompression_is_not_not_found() {
        let err = AssetError::Decompression {
            name: "a.js".into(),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad header"),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("a.js"));
    }
}
