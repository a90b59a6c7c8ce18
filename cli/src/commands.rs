use std::io::{self, Write};
use std::time::UNIX_EPOCH;

use asset_vfs::{AssetError, AssetFs, AssetStore, Backend};

use crate::args::Command;

/// Run one subcommand against `assets`, writing its output to `out`.
pub fn run(command: &Command, assets: &AssetFs, out: &mut impl Write) -> Result<(), AssetError> {
    match command {
        Command::List => {
            match assets.backend() {
                Backend::Compiled(store) => {
                    log::info!("{} compiled assets", store.len());
                }
                Backend::Overlay(store) => {
                    log::info!("listing overlay {}", store.root().display());
                }
            }
            let mut names = assets.list_names();
            names.sort();
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        Command::Cat { name } => {
            let mut handle = assets.open(name)?;
            let copied = io::copy(&mut handle, out);
            handle.close();
            copied?;
        }
        Command::Stat { name } => {
            let mut handle = assets.open(name)?;
            let info = handle.stat();
            let backend = if handle.is_compiled() {
                "compiled"
            } else {
                "overlay"
            };
            handle.close();
            let info = info?;
            let modified = info
                .modified
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            writeln!(out, "name:     {}", info.name)?;
            writeln!(out, "size:     {}", info.size)?;
            writeln!(out, "mode:     {:o}", info.mode)?;
            writeln!(out, "modified: {modified}")?;
            writeln!(out, "backend:  {backend}")?;
        }
    }
    Ok(())
}
