use anyhow::Result;
use clap::Parser;

use zms::cli::{self, Cli};
use zms::config::path::{ensure_config_file, ConfigPaths};
use zms::zoom::client::SystemOpener;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = ConfigPaths::resolve();

    if let Err(e) = ensure_config_file(&paths) {
        eprintln!("Cannot init config dir {}: {e}", paths.config_dir.display());
        std::process::exit(1);
    }

    cli::run(&cli, &paths, &SystemOpener)
}
