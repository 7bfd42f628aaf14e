//! Error types shared by the pipeline stage and the file helpers

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mlproject operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the splitter and the common helpers.
///
/// Failures from the underlying read/parse/write primitives pass through
/// unchanged; only the empty-document and dataset checks are our own.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be opened, read, written or created
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Delimited text could not be parsed or written
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Binary object file could not be encoded or decoded
    #[error(transparent)]
    Bincode(#[from] bincode::Error),

    /// YAML document parsed to nothing (empty file or bare `null`)
    #[error("YAML file is empty: {}", path.display())]
    EmptyDocument { path: PathBuf },

    /// Table has a header but no data rows to split
    #[error("Dataset has no rows to split")]
    EmptyDataset,

    #[error("Test size must be between 0 and 1 (exclusive), got {0}")]
    InvalidTestSize(f64),
}

impl Error {
    /// Check if this is the explicit empty-document error
    pub fn is_empty_document(&self) -> bool {
        matches!(self, Self::EmptyDocument { .. })
    }

    /// Check if this wraps a missing-file I/O error
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Self::Csv(e) => matches!(
                e.kind(),
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
            ),
            _ => false,
        }
    }
}
