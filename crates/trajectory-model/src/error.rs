//! Errors raised while reading, slicing, or looking up trajectory tables.

use std::path::PathBuf;

/// Errors that can occur when working with trajectory tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    #[error("Malformed table: {message}")]
    MalformedTable { message: String },

    #[error("Empty range: first={first}, last={last:?} selects no rows")]
    EmptyRange { first: f64, last: Option<f64> },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("Invalid value {value:?} in column {column:?} at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

impl TableError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedTable {
            message: msg.into(),
        }
    }
}
