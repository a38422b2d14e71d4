// crates/tripdb-core/src/error.rs
use thiserror::Error;

/// Errors raised while reading the mock files or writing `db.json`.
///
/// None of them is recoverable: the first error aborts the run and no output
/// file is created.
#[derive(Debug, Error)]
pub enum TripDbError {
    /// An input file is missing or cannot be opened.
    #[error("mock file not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON, or its top level is not an object.
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// One entry of a keyed file does not have the fields the converter reads.
    #[error("{file}: entry `{key}` has an unexpected shape: {reason}")]
    Shape {
        file: String,
        key: String,
        reason: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TripDbError>;
