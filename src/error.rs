//! Error types for parsing `.pre` files and persisting readings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("No grid-ref= line found in file")]
    MissingGridRef,

    #[error("First grid-ref= line has no header line before it")]
    MissingHeader,

    #[error("No Years= field on header line {line}")]
    MissingYears { line: usize },

    #[error("Invalid {field} year on header line {line}")]
    InvalidYear { line: usize, field: &'static str },

    #[error("Grid reference on line {line} has no comma")]
    MissingComma { line: usize },

    #[error("Invalid value `{token}` on line {line}")]
    InvalidValue { line: usize, token: String },

    #[error("Month {month} on line {line} is not a calendar month")]
    InvalidMonth { line: usize, month: usize },

    #[error("Data on line {line} precedes any grid-ref= line")]
    DataBeforeGridRef { line: usize },
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Grid reference ({x}, {y}) is not a pair of integers")]
    InvalidGridRef { x: String, y: String },
}
