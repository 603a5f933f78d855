//! Error types for floor location ingestion.

use std::path::PathBuf;

use floormap_callnumber::CallNumberError;
use thiserror::Error;

/// Errors that can occur while loading a floor location export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("TSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === TSV Parsing Errors ===
    /// The TSV reader rejected the input (I/O failure, invalid UTF-8).
    #[error("failed to parse TSV: {0}")]
    Tsv(#[from] csv::Error),

    /// A required column is missing or blank.
    #[error("line {line}: required column '{column}' is missing")]
    MissingColumn { line: u64, column: &'static str },

    // === Entry Errors ===
    /// The row's call number range could not be parsed.
    #[error("line {line}: {source}")]
    Entry {
        line: u64,
        #[source]
        source: CallNumberError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/locations.tsv"),
        };
        assert_eq!(err.to_string(), "TSV file not found: /path/to/locations.tsv");
    }

    #[test]
    fn test_missing_column_display() {
        let err = IngestError::MissingColumn {
            line: 4,
            column: "collection",
        };
        assert_eq!(
            err.to_string(),
            "line 4: required column 'collection' is missing"
        );
    }
}
