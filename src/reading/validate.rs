//! Minimal check that a file looks like precipitation data.

use super::GRID_REF_MARKER;

/// Returns true when both a `years` line and a `grid-ref=` line appear anywhere in the file.
pub fn is_precipitation_file(lines: &[String]) -> bool {
    let mut years_present = false;
    let mut grid_ref_present = false;

    for line in lines {
        if years_present && grid_ref_present {
            break;
        }
        let line = line.to_lowercase();
        if line.contains("years") {
            years_present = true;
        }
        if line.contains(GRID_REF_MARKER) {
            grid_ref_present = true;
        }
    }

    years_present && grid_ref_present
}

// -- Tests -------------------------------------------------------------------
