//! Persistence of parsed readings.

pub mod sqlite;

use crate::{error::SinkError, reading::PrecipitationReading};

pub use sqlite::SqliteSink;

/// Durable storage for one run's readings.
pub trait PrecipitationSink {
    /// Creates the destination table if it does not exist yet.
    fn create_table(&self) -> Result<(), SinkError>;

    /// Stores all readings in order, or none of them. Returns the number of rows written.
    fn insert_batch(&self, readings: &[PrecipitationReading]) -> Result<usize, SinkError>;
}
