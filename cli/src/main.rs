mod args;
mod commands;

use std::process::ExitCode;

use asset_vfs::sample::SAMPLE_ASSETS;
use asset_vfs::{AssetFs, CompiledStore};
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::Args::parse();
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let assets = AssetFs::from_config(CompiledStore::from_table(SAMPLE_ASSETS), &config);
    if assets.compiled().is_empty() {
        log::warn!("compiled asset table is empty");
    }
    let mut stdout = std::io::stdout().lock();
    match commands::run(&args.command, &assets, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
