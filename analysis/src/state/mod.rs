//! Application state: the record collection and the upload gate.
//!
//! The collection is an immutable [`Dataset`]. An upload replaces it
//! wholesale and a manual entry builds a new dataset with one more record;
//! nothing edits records in place, so analytics can always take the current
//! dataset as plain input.
//!
//! Only one upload may be in flight. [`AppState::begin_upload`] refuses a
//! second one until [`AppState::finish_upload`] is called.

use std::sync::Arc;

use crate::analytics::{correlate, summarize, table_rows, Correlation, GrowthSummary, TableRow};
use crate::error::{IngestResult, UploadError, ValidationResult};
use crate::models::StudentRecord;
use crate::transform::pipeline::{ingest_upload, IngestOptions, Ingested, UploadedFile};
use crate::validation::parse_entry;

/// Immutable, cheaply clonable record collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[StudentRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A new dataset with `record` appended.
    pub fn with_record(&self, record: StudentRecord) -> Self {
        let mut records = self.records.to_vec();
        records.push(record);
        Self::new(records)
    }

    /// Shares storage with `other`.
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<StudentRecord>> for Dataset {
    fn from(records: Vec<StudentRecord>) -> Self {
        Self::new(records)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    dataset: Dataset,
    upload: UploadStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.dataset.records()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload == UploadStatus::Pending
    }

    /// Mark an upload as in flight.
    pub fn begin_upload(&mut self) -> Result<(), UploadError> {
        if self.is_uploading() {
            log::warn!("Upload refused: another upload is still pending");
            return Err(UploadError::UploadInProgress);
        }
        self.upload = UploadStatus::Pending;
        Ok(())
    }

    /// Close the in-flight upload. On success the dataset is replaced by
    /// the ingested records; on error it is left as it was.
    pub fn finish_upload(&mut self, result: IngestResult<Ingested>) -> IngestResult<Ingested> {
        self.upload = UploadStatus::Idle;
        let ingested = result?;
        self.dataset = Dataset::new(ingested.records.clone());
        log::info!("Dataset replaced with {} records", self.dataset.len());
        Ok(ingested)
    }

    /// Gate, ingest and apply an upload whose bytes are already in memory.
    pub fn upload(&mut self, file: &UploadedFile, options: &IngestOptions) -> IngestResult<Ingested> {
        self.begin_upload()?;
        let result = ingest_upload(file, options);
        self.finish_upload(result)
    }

    pub fn add_record(&mut self, record: StudentRecord) {
        self.dataset = self.dataset.with_record(record);
        log::info!("Added record, dataset now has {} records", self.dataset.len());
    }

    /// Validate manual entry fields and append the record.
    pub fn add_entry(&mut self, hours: &str, fall_score: &str, winter_score: &str) -> ValidationResult<StudentRecord> {
        let record = parse_entry(hours, fall_score, winter_score)?;
        self.add_record(record);
        Ok(record)
    }

    pub fn correlation(&self) -> Correlation {
        correlate(self.records())
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        table_rows(self.records())
    }

    pub fn summary(&self) -> GrowthSummary {
        summarize(self.records())
    }
}
