//! Error types for the template generator.

use std::path::PathBuf;
use thiserror::Error;

/// Generator result type.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Everything that can abort a run. All variants are fatal.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Wrong argument count or mode flag
    #[error("{0}")]
    Usage(String),

    /// Reading the input or writing the output failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed JSON of the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `template.row` / `template.column` value has the wrong shape
    #[error("Schema error in record {index}: {field} {value:?}: {reason}")]
    Schema {
        index: usize,
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// The assembler refused a row
    #[error("Packing error in row {row}: {source}")]
    Packing {
        row: i64,
        #[source]
        source: PackingError,
    },
}

impl TemplateError {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reasons the grid assembler gives up on a row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackingError {
    #[error("column {col} follows column {previous}; bucket is not sorted")]
    NonMonotonic { previous: i64, col: i64 },

    /// `target` is `i64::MAX` when the shifted column overflowed
    #[error("target column {target} is beyond maximum row width {max}")]
    RowTooWide { target: i64, max: usize },
}
