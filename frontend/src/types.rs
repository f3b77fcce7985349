//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Log Types** - Activity log shown under the controls
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MAX_LOG_ENTRIES;

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }
}

/// A single entry of the activity log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// Append an entry, dropping the oldest ones past [`MAX_LOG_ENTRIES`].
pub fn push_capped(logs: &mut Vec<LogEntry>, entry: LogEntry) {
    logs.push(entry);
    if logs.len() > MAX_LOG_ENTRIES {
        let excess = logs.len() - MAX_LOG_ENTRIES;
        logs.drain(..excess);
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// File upload was rejected or failed to ingest.
    Upload(String),
    /// The browser could not read the selected file.
    Read(String),
    /// Manual entry was invalid.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Read(msg) => write!(f, "Read error: {}", msg),
            AppError::Validation(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<growth::IngestError> for AppError {
    fn from(err: growth::IngestError) -> Self {
        AppError::Upload(err.to_string())
    }
}

impl From<growth::ValidationError> for AppError {
    fn from(err: growth::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            level: LogLevel::Info,
            message: message.to_string(),
            timestamp: "00:00:00".to_string(),
        }
    }

    #[test]
    fn test_log_is_capped() {
        let mut logs = Vec::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            push_capped(&mut logs, entry(&i.to_string()));
        }
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].message, "5");
    }

    #[test]
    fn test_error_display() {
        let err: AppError = growth::ValidationError::new(growth::RejectReason::Negative)
            .with_column("hours")
            .into();
        assert_eq!(err.to_string(), "Invalid input: Input contains negative values (column 'hours')");
    }
}
