use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Developer tooling for the extension: a polling reload watcher and
/// placeholder icon generation.
///
/// The watcher fingerprints every watched file at a fixed cadence and prints
/// manual reload instructions whenever something changed. It never drives the
/// browser itself.
#[derive(Parser, Debug)]
#[command(
    name = "ext-dev",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch extension sources and print reload instructions when they change.
    ///
    /// Polls the directory tree at a fixed interval, comparing content
    /// fingerprints against the previous cycle. New and modified files are
    /// reported identically since the remedy is the same: reload. Stop with
    /// Ctrl+C.
    Watch {
        /// Path to the extension source root to watch.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Seconds between poll cycles.
        #[arg(short = 'n', long, default_value_t = 1)]
        interval: u64,

        /// Print each watched file during the initial scan.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Take a one-shot snapshot of the watched files and print a summary.
    Scan {
        /// Path to the extension source root to scan.
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print each file with its content fingerprint.
        #[arg(short, long)]
        verbose: bool,

        /// Output the snapshot as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Generate placeholder PNG icons for the extension manifest.
    Icons {
        /// Directory to write icon<SIZE>.png files into.
        #[arg(default_value = "icons")]
        out_dir: PathBuf,

        /// Icon edge sizes in pixels (comma-separated).
        #[arg(long, value_delimiter = ',', default_values_t = [16u32, 32, 48, 128])]
        sizes: Vec<u32>,

        /// Label whose first character is drawn on the icon.
        /// Defaults to the extension name from ext-dev.toml.
        #[arg(long)]
        label: Option<String>,
    },
}
