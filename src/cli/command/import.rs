//! Import a `.pre` file into the precipitation table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::{
    db::PrecipitationSink,
    deserialise::read_lines,
    error::SinkError,
    locate::resolve_input_file,
    reading::{extract_readings, is_precipitation_file, Header, PrecipitationReading},
};

#[derive(Debug, PartialEq)]
pub enum ImportOutcome {
    /// No file given and no `.pre` file in the search directory.
    NoInputFile,
    /// The file lacks the `years` or `grid-ref=` keywords.
    InvalidFile(PathBuf),
    /// All readings were stored.
    Imported { file_path: PathBuf, rows: usize },
    /// The sink failed, nothing from this run was stored.
    NotSaved(PathBuf),
}

/// Locates, parses and stores one `.pre` file.
///
/// Parse failures are returned as errors. Sink failures are logged and reported as
/// [`ImportOutcome::NotSaved`].
pub fn import<S: PrecipitationSink>(
    file_path: Option<&Path>,
    search_dir: &Path,
    sink: &S,
) -> Result<ImportOutcome> {
    let Some(file_path) = resolve_input_file(file_path, search_dir)
        .with_context(|| format!("Failed to scan {}", search_dir.display()))?
    else {
        return Ok(ImportOutcome::NoInputFile);
    };
    println!("\nImporting precipitation data from file: {}", file_path.display());

    let lines = read_lines(&file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    if !is_precipitation_file(&lines) {
        return Ok(ImportOutcome::InvalidFile(file_path));
    }

    let header = Header::from_lines(&lines)?;
    info!(
        "Years {} to {}, header ends on line {}",
        header.start_year,
        header.end_year,
        header.end_index + 1
    );

    let readings = extract_readings(&lines, header.end_index, header.start_year)?;
    if readings.is_empty() {
        warn!("No readings found in {}", file_path.display());
    } else {
        info!("Parsed {} readings", readings.len());
    }

    match save(sink, &readings) {
        Ok(rows) => Ok(ImportOutcome::Imported { file_path, rows }),
        Err(e) => {
            error!("Failed to save readings: {e}");
            Ok(ImportOutcome::NotSaved(file_path))
        }
    }
}

fn save<S: PrecipitationSink>(sink: &S, readings: &[PrecipitationReading]) -> Result<usize, SinkError> {
    sink.create_table()?;
    sink.insert_batch(readings)
}

// -- Tests -------------------------------------------------------------------
