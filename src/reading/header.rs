//! Header parsing: locates the header/body boundary and reads the year range.
//!
//! The last header line carries a fixed-width `Years=YYYY-YYYY` field. Years are sliced
//! at fixed offsets after the `years=` marker rather than searched for, so a header that
//! deviates from that layout is rejected instead of guessed at.
//! Year fields are not trimmed either, so a space-padded year such as `" 980"` is an
//! error rather than being read as 980.

use crate::error::ParseError;

use super::is_grid_ref_line;

const YEARS_MARKER: &str = "years=";
const YEAR_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub start_year: i32,
    pub end_year: i32,
    /// Index of the last header line, one before the first grid-ref line.
    pub end_index: usize,
}

impl Header {
    pub fn from_lines(lines: &[String]) -> Result<Self, ParseError> {
        let grid_ref_index = lines
            .iter()
            .position(|line| is_grid_ref_line(line))
            .ok_or(ParseError::MissingGridRef)?;

        let end_index = grid_ref_index
            .checked_sub(1)
            .ok_or(ParseError::MissingHeader)?;
        let (start_year, end_year) = parse_years(&lines[end_index], end_index + 1)?;

        Ok(Header {
            start_year,
            end_year,
            end_index,
        })
    }
}

fn parse_years(line: &str, line_number: usize) -> Result<(i32, i32), ParseError> {
    // ASCII lowering keeps byte offsets identical to the original line
    let start = line
        .to_ascii_lowercase()
        .find(YEARS_MARKER)
        .ok_or(ParseError::MissingYears { line: line_number })?
        + YEARS_MARKER.len();
    let end = start + YEAR_WIDTH + 1;

    let start_year = parse_year(line, start, line_number, "start")?;
    let end_year = parse_year(line, end, line_number, "end")?;

    Ok((start_year, end_year))
}

fn parse_year(
    line: &str,
    offset: usize,
    line_number: usize,
    field: &'static str,
) -> Result<i32, ParseError> {
    let invalid = ParseError::InvalidYear {
        line: line_number,
        field,
    };

    line.get(offset..offset + YEAR_WIDTH)
        .ok_or(invalid.clone())?
        .parse()
        .map_err(|_| invalid)
}

// -- Tests -------------------------------------------------------------------
