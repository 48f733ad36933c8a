//! Grid reference extraction from `grid-ref=` lines.

use crate::error::ParseError;

/// X and Y references as digit strings, exactly as found on the line.
///
/// Either part may be empty when its side of the comma has no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRef {
    pub x: String,
    pub y: String,
}

impl GridRef {
    /// Splits the line at its first comma and keeps only the digits on each side.
    pub fn from_line(line: &str, line_number: usize) -> Result<Self, ParseError> {
        let (left, right) = line
            .split_once(',')
            .ok_or(ParseError::MissingComma { line: line_number })?;

        Ok(GridRef {
            x: digits(left),
            y: digits(right),
        })
    }
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

// -- Tests -------------------------------------------------------------------
