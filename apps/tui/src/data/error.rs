use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading a table or reading a column out of it.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column `{column}` not found in {table}")]
    MissingColumn { table: String, column: String },

    #[error("invalid number {value:?} in {table}.{column} (row {row})")]
    InvalidNumber {
        table: String,
        column: String,
        row: usize,
        value: String,
    },

    #[error("no fan with id {0:?}")]
    UnknownFan(String),
}
