//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Catalog directory not found.
    #[error("catalog directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Catalog CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read or parse the CSV stream.
    #[error("failed to read CSV {source_name}: {source}")]
    CsvRead {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// Required column absent from the header row.
    #[error("required column '{column}' not found in {source_name}")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },

    /// A complete row carried a value that does not parse.
    #[error("invalid {field} value '{value}' at row {row} in {source_name}")]
    InvalidValue {
        field: &'static str,
        value: String,
        row: usize,
        source_name: String,
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
            path: PathBuf::from("/catalog/Country.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /catalog/Country.csv");

        let err = IngestError::InvalidValue {
            field: "Data (GB)",
            value: "lots".to_string(),
            row: 3,
            source_name: "Country.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid Data (GB) value 'lots' at row 3 in Country.csv"
        );
    }
}
