//! Loads a `.pre` file from the file system into memory.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::debug;

/// Reads every line of the file, with trailing whitespace removed.
pub fn read_lines(file_path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(file_path)?;
    let reader = io::BufReader::new(file);

    let lines = reader
        .lines()
        .map(|line| line.map(|l| l.trim_end().to_string()))
        .collect::<io::Result<Vec<_>>>()?;

    debug!("Read {} lines from {}", lines.len(), file_path.display());

    Ok(lines)
}

// -- Tests -------------------------------------------------------------------
