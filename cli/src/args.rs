//! Command-line arguments.
//!
//! Settings are layered: config file, then the `ASSETS_PATH` environment
//! variable, then explicit flags.

use std::path::PathBuf;

use asset_vfs::{AssetConfig, AssetError};
use clap::{Parser, Subcommand};

/// Inspect the assets served by the asset file system.
#[derive(Parser, Debug)]
#[command(
    name = "assets",
    about = "Inspect compiled assets and the development overlay",
    long_about = "Lists, prints and stats assets exactly as a server would see them.\n\n\
        If the overlay directory is set and exists, it is used instead of the\n\
        compiled table. The overlay can be set in the config file, with the\n\
        ASSETS_PATH environment variable, or with --overlay.\n\
        \n\
        EXAMPLES:\n\
          assets list\n\
          assets cat /layout.html\n\
          assets --overlay ./static stat a.js",
    version
)]
pub struct Args {
    /// TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overlay directory served instead of the compiled table.
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Name served for "" and "/".
    #[arg(long)]
    pub default_document: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every asset name of the active backend.
    List,
    /// Write an asset's content to stdout.
    Cat { name: String },
    /// Show an asset's metadata.
    Stat { name: String },
}

impl Args {
    /// Merge config file, environment and flags.
    pub fn resolve_config(&self) -> Result<AssetConfig, AssetError> {
        let mut config = match &self.config {
            Some(path) => AssetConfig::load(path)?,
            None => AssetConfig::default(),
        };
        config.apply_env();
        if let Some(overlay) = &self.overlay {
            config.overlay = Some(overlay.clone());
        }
        if let Some(name) = &self.default_document {
            config.default_document = name.clone();
        }
        Ok(config)
    }
}
