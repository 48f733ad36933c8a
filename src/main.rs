mod cli;
mod db;
mod deserialise;
mod error;
mod locate;
mod reading;

use std::{env, fs};

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{command, command::ImportOutcome, setup_logging, Cli};
use db::SqliteSink;

fn main() -> Result<()> {
    let start_time = Local::now();
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let search_dir = match &cli.search_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let sink = SqliteSink::new(&cli.database).with_progress(!cli.quiet);

    match command::import(cli.file_path.as_deref(), &search_dir, &sink)? {
        ImportOutcome::NoInputFile => {
            println!("\nCould not find any .pre files.\nExiting app.\n");
            return Ok(());
        }
        ImportOutcome::InvalidFile(file_path) => {
            println!(
                "The file {} does not appear to contain valid precipitation data.\nExiting app.\n",
                file_path.display()
            );
            return Ok(());
        }
        ImportOutcome::Imported { file_path, rows } => {
            let db_path = fs::canonicalize(sink.db_path()).unwrap_or_else(|_| cli.database.clone());
            println!(
                "{} rows from {} exported to local SQLite database: {}",
                rows,
                file_path.display(),
                db_path.display()
            );
        }
        ImportOutcome::NotSaved(file_path) => {
            println!("No data from {} was saved.", file_path.display());
        }
    }

    let run_time = Local::now() - start_time;
    println!("Run time: {:.3}s\n", run_time.num_milliseconds() as f64 / 1000.0);

    Ok(())
}
