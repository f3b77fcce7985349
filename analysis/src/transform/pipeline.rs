//! High-level ingestion API: uploaded file or CSV text to student records.
//!
//! The wide layout is the canonical contract. The long layout is parsed into
//! observations and pivoted by [`long_to_wide`] before it reaches the same
//! record type.
//!
//! # Example
//!
//! ```rust
//! use growth::{ingest_text, CsvFormat, IngestOptions};
//!
//! let csv = "window,score,hours\nfall,80,5\nwinter,85,5\n";
//! let options = IngestOptions::default().with_format(CsvFormat::Long);
//! let ingested = ingest_text(csv, &options).unwrap();
//!
//! assert_eq!(ingested.records.len(), 1);
//! assert_eq!(ingested.records[0].growth(), 5.0);
//! ```

use serde::{Deserialize, Serialize};

use super::reshape::long_to_wide;
use crate::error::{IngestResult, UploadError, ValidationError, ValidationResult};
use crate::models::{CsvFormat, StudentRecord};
use crate::parser::{data_rows, decode_auto, is_csv_file};
use crate::validation::{validate_long_row, validate_wide_row};

/// Default upload size limit: 5 MiB.
pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Options for the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestOptions {
    /// Declared layout of the file
    pub format: CsvFormat,

    /// Field delimiter
    pub delimiter: u8,

    /// Uploads larger than this are rejected before decoding
    pub max_file_size: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            format: CsvFormat::Wide,
            delimiter: b',',
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn with_format(mut self, format: CsvFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_max_file_size(mut self, max_file_size: usize) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// An uploaded file, fully read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Successful ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingested {
    /// Replacement collection, in file order.
    pub records: Vec<StudentRecord>,

    /// Data rows that passed validation.
    pub accepted_rows: usize,

    /// Long format only: hours groups missing a fall or winter score.
    pub dropped_groups: usize,

    pub format: CsvFormat,
}

/// Check the file type and size, decode it, then ingest the text.
pub fn ingest_upload(file: &UploadedFile, options: &IngestOptions) -> IngestResult<Ingested> {
    if !is_csv_file(&file.name, &file.mime) {
        log::warn!("Rejected upload '{}' ({})", file.name, file.mime);
        return Err(UploadError::WrongFileType {
            name: file.name.clone(),
        }
        .into());
    }

    if file.bytes.len() > options.max_file_size {
        return Err(UploadError::TooLarge {
            size: file.bytes.len(),
            limit: options.max_file_size,
        }
        .into());
    }

    let text = decode_auto(&file.bytes)?;
    ingest_text(&text, options)
}

/// Ingest CSV text in the declared format.
///
/// Fails on the first invalid row. `EmptyDataset` is raised when no row
/// was accepted; a long file whose rows are all valid but never pair up
/// succeeds with zero records and a non-zero `dropped_groups`.
pub fn ingest_text(text: &str, options: &IngestOptions) -> IngestResult<Ingested> {
    let rows = data_rows(text, options.delimiter)?;

    let ingested = match options.format {
        CsvFormat::Wide => {
            let records = rows
                .iter()
                .map(|r| validate_wide_row(r.row, &r.field_refs()))
                .collect::<ValidationResult<Vec<_>>>()?;
            ensure_not_empty(records.len())?;
            Ingested {
                accepted_rows: records.len(),
                records,
                dropped_groups: 0,
                format: CsvFormat::Wide,
            }
        }
        CsvFormat::Long => {
            let observations = rows
                .iter()
                .map(|r| validate_long_row(r.row, &r.field_refs()))
                .collect::<ValidationResult<Vec<_>>>()?;
            ensure_not_empty(observations.len())?;
            let reshaped = long_to_wide(&observations);
            Ingested {
                accepted_rows: observations.len(),
                records: reshaped.records,
                dropped_groups: reshaped.dropped_groups,
                format: CsvFormat::Long,
            }
        }
    };

    log::debug!(
        "Ingested {} rows as {} format into {} records",
        ingested.accepted_rows,
        ingested.format,
        ingested.records.len()
    );
    Ok(ingested)
}

fn ensure_not_empty(accepted: usize) -> ValidationResult<()> {
    if accepted == 0 {
        Err(ValidationError::empty_dataset())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IngestError, RejectReason};

    fn wide() -> IngestOptions {
        IngestOptions::default()
    }

    fn long() -> IngestOptions {
        IngestOptions::default().with_format(CsvFormat::Long)
    }

    fn rejection(result: IngestResult<Ingested>) -> ValidationError {
        match result {
            Err(IngestError::Validation(e)) => e,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_wide_rows_in_file_order() {
        let csv = "hours,fall,winter\n1,50,50\n2,50,60\n3,50,80\n";
        let out = ingest_text(csv, &wide()).unwrap();
        assert_eq!(out.accepted_rows, 3);
        assert_eq!(
            out.records,
            vec![
                StudentRecord::new(1.0, 50.0, 50.0),
                StudentRecord::new(2.0, 50.0, 60.0),
                StudentRecord::new(3.0, 50.0, 80.0),
            ]
        );
    }

    #[test]
    fn test_wide_non_numeric_stops_at_row() {
        let csv = "hours,fall,winter\n1,50,50\n2,abc,60\n3,-1,80\n";
        let err = rejection(ingest_text(csv, &wide()));
        assert_eq!(err.reason, RejectReason::NonNumeric);
        assert_eq!(err.row, Some(2));
    }

    #[test]
    fn test_wide_negative() {
        let err = rejection(ingest_text("h,f,w\n1,50,-5\n", &wide()));
        assert_eq!(err.reason, RejectReason::Negative);
        assert_eq!(err.row, Some(1));
    }

    #[test]
    fn test_leading_blank_line_is_taken_as_header() {
        let err = rejection(ingest_text("\nhours,fallScore,winterScore\n1,50,55\n", &wide()));
        assert_eq!(err.reason, RejectReason::NonNumeric);
        assert_eq!(err.row, Some(1));
        assert_eq!(err.value.as_deref(), Some("hours"));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let err = rejection(ingest_text("hours,fall,winter\n\n\n", &wide()));
        assert_eq!(err.reason, RejectReason::EmptyDataset);
        assert_eq!(err.row, None);
    }

    #[test]
    fn test_long_pair() {
        let csv = "testWindow,score,hours\nfall,80,5\nwinter,85,5\n";
        let out = ingest_text(csv, &long()).unwrap();
        assert_eq!(out.records, vec![StudentRecord::new(5.0, 80.0, 85.0)]);
        assert_eq!(out.accepted_rows, 2);
    }

    #[test]
    fn test_long_lone_fall_yields_no_records() {
        let out = ingest_text("testWindow,score,hours\nfall,80,5\n", &long()).unwrap();
        assert!(out.records.is_empty());
        assert_eq!(out.dropped_groups, 1);
    }

    #[test]
    fn test_long_invalid_window() {
        let csv = "testWindow,score,hours\nfall,80,5\nSpring,85,5\n";
        let err = rejection(ingest_text(csv, &long()));
        assert_eq!(err.reason, RejectReason::InvalidTestWindow);
        assert_eq!(err.row, Some(2));
    }

    #[test]
    fn test_long_window_case_insensitive() {
        let csv = "testWindow,score,hours\nFALL,80,5\nWinter,85,5\n";
        assert_eq!(ingest_text(csv, &long()).unwrap().records.len(), 1);
    }

    #[test]
    fn test_wide_file_in_long_mode_is_rejected() {
        let err = rejection(ingest_text("hours,fall,winter\n1,50,55\n", &long()));
        assert_eq!(err.reason, RejectReason::InvalidTestWindow);
    }

    #[test]
    fn test_upload_wrong_file_type() {
        let file = UploadedFile::new("scores.txt", "text/plain", b"h,f,w\n1,2,3".to_vec());
        let err = ingest_upload(&file, &wide()).unwrap_err();
        assert!(matches!(err, IngestError::Upload(UploadError::WrongFileType { .. })));
    }

    #[test]
    fn test_upload_too_large() {
        let file = UploadedFile::new("scores.csv", "text/csv", b"h,f,w\n1,2,3".to_vec());
        let err = ingest_upload(&file, &wide().with_max_file_size(4)).unwrap_err();
        assert_eq!(err, IngestError::Upload(UploadError::TooLarge { size: 11, limit: 4 }));
    }

    #[test]
    fn test_upload_ok() {
        let file = UploadedFile::new("scores.csv", "", b"hours,fall,winter\r\n4,61,70\r\n".to_vec());
        let out = ingest_upload(&file, &wide()).unwrap();
        assert_eq!(out.records, vec![StudentRecord::new(4.0, 61.0, 70.0)]);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let out = ingest_text("h;f;w\n1;2;3\n", &wide().with_delimiter(b';')).unwrap();
        assert_eq!(out.records.len(), 1);
    }
}
