mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod output;
mod storage;
mod tracker;
mod utils;
mod view;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use app::CommandContext;
use cli::Cli;
use config::{Config, default_data_dir};
use consts::DATA_DIR_ENV;
use storage::Storage;
use utils::Timezone;

/// `--data-dir`, then the environment, then the config file, then the platform default
fn resolve_data_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.data_dir
        .clone()
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(default_data_dir)
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    logging::init(cli.debug);

    let timezone = match Timezone::parse(cli.timezone.as_deref()) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let storage = Storage::in_dir(&resolve_data_dir(&cli, &config));
    debug!(path = %storage.path().display(), "using session store");

    let ctx = CommandContext {
        cli: &cli,
        storage,
        timezone,
    };
    if let Err(e) = app::run(&ctx) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
