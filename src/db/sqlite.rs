//! SQLite storage for precipitation readings.

use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use rusqlite::{
    params,
    types::{ToSql, ToSqlOutput},
    Connection,
};
use tracing::debug;

use crate::{
    cli::create_progress_bar,
    error::SinkError,
    reading::{GridRef, PrecipitationReading, Value},
};

use super::PrecipitationSink;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS precipitation (
    [Xref] INTEGER,
    [Yref] INTEGER,
    [Date] TEXT,
    [Value] INTEGER
)";

const INSERT_READING: &str =
    "INSERT INTO precipitation (Xref, Yref, Date, Value) VALUES (?1, ?2, ?3, ?4)";

/// Writes to the `precipitation` table of a SQLite database file.
///
/// Every call opens its own connection, which is closed when the call returns.
#[derive(Debug, Clone)]
pub struct SqliteSink {
    db_path: PathBuf,
    show_progress: bool,
}

impl SqliteSink {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        SqliteSink {
            db_path: db_path.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn progress_bar(&self, size: usize) -> ProgressBar {
        if self.show_progress {
            create_progress_bar(size as u64, "Saving to database".to_string())
        } else {
            ProgressBar::hidden()
        }
    }
}

impl PrecipitationSink for SqliteSink {
    fn create_table(&self) -> Result<(), SinkError> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute(CREATE_TABLE, ())?;

        Ok(())
    }

    fn insert_batch(&self, readings: &[PrecipitationReading]) -> Result<usize, SinkError> {
        let mut conn = Connection::open(&self.db_path)?;
        let pb = self.progress_bar(readings.len());

        // Dropping the transaction without commit rolls the whole batch back
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_READING)?;
            for reading in readings {
                let (x, y) = grid_ref_values(&reading.grid_ref)?;
                stmt.execute(params![x, y, reading.date_string(), reading.value])?;
                pb.inc(1);
            }
        }
        tx.commit()?;

        pb.finish_with_message("Database updated");
        debug!("Inserted {} rows into {}", readings.len(), self.db_path.display());

        Ok(readings.len())
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match *self {
            Value::Integer(v) => ToSqlOutput::from(v),
            Value::Real(v) => ToSqlOutput::from(v),
        })
    }
}

fn grid_ref_values(grid_ref: &GridRef) -> Result<(i64, i64), SinkError> {
    let invalid = || SinkError::InvalidGridRef {
        x: grid_ref.x.clone(),
        y: grid_ref.y.clone(),
    };
    let x: i64 = grid_ref.x.parse().map_err(|_| invalid())?;
    let y: i64 = grid_ref.y.parse().map_err(|_| invalid())?;

    Ok((x, y))
}

// -- Tests -------------------------------------------------------------------
