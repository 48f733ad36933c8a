//! Command line interface.

pub mod command;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_DATABASE: &str = "precipitation_database";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Parses precipitation data from a .pre file and inserts it into a local SQLite database.
pub struct Cli {
    /// Path to a file containing the precipitation data. When missing or not found,
    /// the first .pre file in the search directory is used
    pub file_path: Option<PathBuf>,

    /// SQLite database file to write to
    #[arg(short, long, default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Directory scanned for .pre files [default: current directory]
    #[arg(long)]
    pub search_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors, and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Sends `tracing` output to stderr. `RUST_LOG` takes precedence over the CLI flags.
pub fn setup_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pre_import={}", cli.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    let style = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos:>10}/{len:10} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");

    ProgressBar::new(size).with_message(message).with_style(style)
}

// -- Tests -------------------------------------------------------------------
