//! Finds the `.pre` file to import.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

const PRE_EXTENSION: &str = "pre";

/// Returns the given path if it exists, otherwise the first `.pre` file in `search_dir`.
pub fn resolve_input_file(
    file_path: Option<&Path>,
    search_dir: &Path,
) -> io::Result<Option<PathBuf>> {
    if let Some(path) = file_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        debug!("{} does not exist, scanning {}", path.display(), search_dir.display());
    }

    find_pre_file(search_dir)
}

// Entries are sorted by name so the pick does not depend on directory order
fn find_pre_file(search_dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(search_dir)? {
        let path = entry?.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == PRE_EXTENSION) {
            candidates.push(path);
        }
    }
    candidates.sort();

    Ok(candidates.into_iter().next())
}

// -- Tests -------------------------------------------------------------------
