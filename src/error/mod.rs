//! Error types for report ingestion and chart output.

use std::path::PathBuf;
use thiserror::Error;

/// A row that looks like benchmark data but cannot be interpreted.
///
/// These are never skipped: a recognized row with broken numeric cells means
/// the report layout has shifted, so the whole run stops.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    /// The row is too short to hold the time column.
    #[error("row has {found} cells, expected at least {expected}")]
    MissingColumns { found: usize, expected: usize },

    /// The array size cell is not an integer.
    #[error("invalid array size '{value}'")]
    InvalidArraySize { value: String },

    /// The time cell is not a finite, non-negative number.
    #[error("invalid time per element '{value}'")]
    InvalidTime { value: String },
}

/// Top-level error for a plotting run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// A fatal row error, located in its input.
    #[error("{origin}:{line}: {source}")]
    Row {
        origin: String,
        line: usize,
        #[source]
        source: RowError,
    },

    #[error("failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },

    #[error("failed to export {}: {message}", .path.display())]
    Export { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
