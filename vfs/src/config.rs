use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AssetError;
use crate::name::DEFAULT_DOCUMENT;

/// Environment variable naming the overlay directory.
pub const OVERLAY_ENV: &str = "ASSETS_PATH";

/// Asset file system configuration, usually loaded from `assets.toml`.
///
/// ```toml
/// overlay = "./static"
/// default_document = "index.html"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory served instead of the compiled table while it exists.
    pub overlay: Option<PathBuf>,
    /// Name served for `""` and `"/"`.
    pub default_document: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            overlay: None,
            default_document: DEFAULT_DOCUMENT.to_owned(),
        }
    }
}

impl AssetConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AssetError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&content)
            .map_err(|e| AssetError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Defaults plus the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Let [`OVERLAY_ENV`] override the overlay path, if set and non-empty.
    pub fn apply_env(&mut self) {
        self.apply_overlay_var(std::env::var_os(OVERLAY_ENV));
    }

    fn apply_overlay_var(&mut self, value: Option<OsString>) {
        if let Some(value) = value
            && !value.is_empty()
        {
            log::debug!("{OVERLAY_ENV} = {value:?}");
            self.overlay = Some(PathBuf::from(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AssetConfig::default();
        assert_eq!(config.overlay, None);
        assert_eq!(config.default_document, "index.html");
    }

    #[test]
    fn parse_full() {
        let config = AssetConfig::parse(
            r#"
            overlay = "/srv/static"
            default_document = "layout.html"
            "#,
        )
        .unwrap();
        assert_eq!(config.overlay, Some(PathBuf::from("/srv/static")));
        assert_eq!(config.default_document, "layout.html");
    }

    #[test]
    fn parse_partial_keeps_defaults() {
        let config = AssetConfig::parse(r#"overlay = "dev""#).unwrap();
        assert_eq!(config.default_document, "index.html");
    }

    #[test]
    fn env_overrides_file() {
        let mut config = AssetConfig::parse(r#"overlay = "from-file""#).unwrap();
        config.apply_overlay_var(Some("from-env".into()));
        assert_eq!(config.overlay, Some(PathBuf::from("from-env")));
    }

    #[test]
    fn empty_env_is_ignored() {
        let mut config = AssetConfig::default();
        config.apply_overlay_var(Some(OsString::new()));
        assert_eq!(config.overlay, None);
        config.apply_overlay_var(None);
        assert_eq!(config.overlay, None);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.toml");
        std::fs::write(&path, "default_document = \"home.html\"\n").unwrap();

        let config = AssetConfig::load(&path).unwrap();
        assert_eq!(config.default_document, "home.html");
    }

    #[test]
    fn load_errors_are_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = AssetConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, AssetError::Config(_)));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "overlay = [").unwrap();
        let bad = AssetConfig::load(&path).unwrap_err();
        assert!(matches!(bad, AssetError::Config(_)));
    }
}
