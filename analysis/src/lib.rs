//! # Growth - student testing data ingestion and growth correlation
//!
//! Takes fall and winter benchmark scores together with the hours each
//! student spent on a program, and measures how strongly hours relate to
//! score growth.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Validate   │────▶│  Records    │
//! │ (long/wide) │     │ (decode,    │     │ (+ reshape  │     │  (Dataset)  │
//! └─────────────┘     │  split)     │     │  long form) │     └──────┬──────┘
//!                     └─────────────┘     └─────────────┘            │
//!                                                             ┌──────▼──────┐
//!                                                             │  Analytics  │
//!                                                             │ (Pearson r) │
//!                                                             └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use growth::{AppState, IngestOptions, UploadedFile};
//!
//! let mut state = AppState::new();
//! let file = UploadedFile::new(
//!     "scores.csv",
//!     "text/csv",
//!     b"hours,fall,winter\n1,50,50\n2,50,60\n3,50,80\n".to_vec(),
//! );
//! state.upload(&file, &IngestOptions::default()).unwrap();
//!
//! let correlation = state.correlation();
//! assert_eq!(correlation.result().unwrap().label(), "Strong positive correlation");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (StudentRecord, RawObservation, TestWindow)
//! - [`parser`] - File-type check, decoding and row splitting
//! - [`validation`] - Field and row validation, manual entry
//! - [`transform`] - Long-to-wide reshaping and the ingestion pipeline
//! - [`analytics`] - Correlation and presentation views
//! - [`state`] - Dataset and upload gate

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Transformation
pub mod transform;

// Analytics
pub mod analytics;

// Application state
pub mod state;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{IngestError, IngestResult, RejectReason, UploadError, ValidationError, ValidationResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CsvFormat, RawObservation, StudentRecord, TestWindow};

// =============================================================================
// Re-exports - Parsing and validation
// =============================================================================

pub use parser::{data_rows, decode_auto, decode_content, detect_encoding, is_csv_file, CsvRow};
pub use validation::{parse_entry, validate_long_row, validate_wide_row};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    ingest_text, ingest_upload, long_to_wide, IngestOptions, Ingested, Reshaped, UploadedFile,
    DEFAULT_MAX_FILE_SIZE,
};

// =============================================================================
// Re-exports - Analytics
// =============================================================================

pub use analytics::{
    correlate, correlation_lines, format_coefficient, format_value, scatter_points, summarize,
    table_rows, Correlation, CorrelationResult, Direction, GrowthSummary, ScatterPoint, Strength,
    TableRow, Undefined, TABLE_HEADERS,
};

// =============================================================================
// Re-exports - State
// =============================================================================

pub use state::{AppState, Dataset, UploadStatus};
