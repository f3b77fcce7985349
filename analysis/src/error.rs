//! Error types for the ingestion pipeline.
//!
//! - [`ValidationError`] - Row-level rejection with the first offending row
//! - [`RejectReason`] - Why a row (or the whole file) was rejected
//! - [`UploadError`] - Problems with the uploaded file itself
//! - [`IngestError`] - Top-level error returned by the pipeline
//!
//! Conversion is automatic via `From`, so `?` works across layers.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Row Validation Errors
// =============================================================================

/// Reason a row or a dataset was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A numeric field failed to parse, was empty, or was not finite.
    NonNumeric,
    /// A numeric field was below zero.
    Negative,
    /// The test window was neither `fall` nor `winter`.
    InvalidTestWindow,
    /// No row was accepted.
    EmptyDataset,
    /// The row did not have the expected number of fields.
    WrongFieldCount { expected: usize, found: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NonNumeric => write!(f, "contains invalid numbers"),
            RejectReason::Negative => write!(f, "contains negative values"),
            RejectReason::InvalidTestWindow => {
                write!(f, "has invalid test window. Must be \"fall\" or \"winter\"")
            }
            RejectReason::EmptyDataset => write!(f, "no valid data found"),
            RejectReason::WrongFieldCount { expected, found } => {
                write!(f, "has {} fields, expected {}", found, expected)
            }
        }
    }
}

/// First rejection encountered while validating input.
///
/// `row` follows the file layout: the header is row 0 and the first line
/// after it is row 1. Dataset-level and manual-entry errors carry no row.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub row: Option<usize>,
    pub column: Option<String>,
    pub value: Option<String>,
    pub reason: RejectReason,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason == RejectReason::EmptyDataset {
            return write!(f, "No valid data found in CSV file");
        }
        match self.row {
            Some(row) => write!(f, "Row {} {}", row, self.reason)?,
            None => write!(f, "Input {}", self.reason)?,
        }
        match (&self.column, &self.value) {
            (Some(col), Some(val)) => write!(f, " (column '{}', value '{}')", col, val),
            (Some(col), None) => write!(f, " (column '{}')", col),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(reason: RejectReason) -> Self {
        Self {
            row: None,
            column: None,
            value: None,
            reason,
        }
    }

    pub fn empty_dataset() -> Self {
        Self::new(RejectReason::EmptyDataset)
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors about the uploaded file, raised before any row is parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UploadError {
    /// Neither the MIME type nor the extension identify a CSV file.
    #[error("Invalid file type '{name}': please upload a CSV file")]
    WrongFileType { name: String },

    /// File exceeds the configured size limit.
    #[error("File is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    /// The file's bytes could not be read.
    #[error("Failed to read file: {0}")]
    Unreadable(String),

    /// Bytes could not be decoded to text.
    #[error("Failed to decode file: {0}")]
    Encoding(String),

    /// The CSV reader could not split the text into records.
    #[error("Malformed CSV: {0}")]
    Malformed(String),

    /// Another upload has not finished yet.
    #[error("An upload is already in progress")]
    UploadInProgress,
}

// =============================================================================
// Ingestion Errors (top-level)
// =============================================================================

/// Top-level ingestion error.
///
/// Returned by [`crate::transform::pipeline::ingest_upload`]; on this error
/// the previously held dataset must be left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for row and entry validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for the ingestion pipeline.
pub type IngestResult<T> = Result<T, IngestError>;
