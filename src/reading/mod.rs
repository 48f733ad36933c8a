//! Parsing of `.pre` precipitation files.

pub mod grid_ref;
pub mod header;
pub mod precipitation;
pub mod validate;

pub use grid_ref::GridRef;
pub use header::Header;
pub use precipitation::{extract_readings, PrecipitationReading, Value};
pub use validate::is_precipitation_file;

const GRID_REF_MARKER: &str = "grid-ref=";

/// Whether the line starts a new grid section, ignoring case.
pub fn is_grid_ref_line(line: &str) -> bool {
    line.to_lowercase().contains(GRID_REF_MARKER)
}
