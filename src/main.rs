mod cli;
mod config;
mod icons;
mod output;
mod snapshot;
mod walker;
mod watcher;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::signal;

use cli::{Cli, Commands};
use config::{WatchConfig, WatchSet};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Watch {
            path,
            interval,
            verbose,
        } => {
            let config = WatchConfig::load(&path);
            let watch = WatchSet::new(path, config);

            let shutdown = async {
                signal::ctrl_c()
                    .await
                    .expect("failed to install Ctrl+C handler");
            };

            watcher::run(
                watch,
                Duration::from_secs(interval.max(1)),
                shutdown,
                verbose,
            )
            .await?;
        }

        Commands::Scan {
            path,
            verbose,
            json,
        } => {
            let config = WatchConfig::load(&path);
            let watch = WatchSet::new(path, config);
            let snapshot = snapshot::build_snapshot(&watch, false)?;
            output::print_scan_summary(&watch, &snapshot, verbose, json);
        }

        Commands::Icons {
            out_dir,
            sizes,
            label,
        } => {
            let label = label.unwrap_or_else(|| {
                let config = WatchConfig::load(Path::new("."));
                config.name.unwrap_or_else(|| "extension".to_string())
            });
            icons::write_icons(&out_dir, &sizes, &label)?;
        }
    }

    Ok(())
}
