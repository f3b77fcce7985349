//! Domain models for student testing data.
//!
//! - [`StudentRecord`] - One student: hours on the program plus both scores
//! - [`RawObservation`] - One long-form row, before pivoting
//! - [`TestWindow`] - Fall or winter benchmark window
//! - [`CsvFormat`] - Declared layout of an uploaded CSV

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Test Window
// =============================================================================

/// Benchmark window a score was recorded in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TestWindow {
    Fall,
    Winter,
}

impl TestWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestWindow::Fall => "fall",
            TestWindow::Winter => "winter",
        }
    }
}

impl FromStr for TestWindow {
    type Err = ();

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fall" => Ok(TestWindow::Fall),
            "winter" => Ok(TestWindow::Winter),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TestWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Long-form input row. Only lives during ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawObservation {
    pub test_window: TestWindow,
    pub score: f64,
    pub hours: f64,
}

/// Canonical per-student record.
///
/// All fields are finite and non-negative; construct through
/// [`crate::validation::parse_entry`] or the ingestion pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub hours: f64,
    pub fall_score: f64,
    pub winter_score: f64,
}

impl StudentRecord {
    pub fn new(hours: f64, fall_score: f64, winter_score: f64) -> Self {
        Self {
            hours,
            fall_score,
            winter_score,
        }
    }

    /// Winter score minus fall score.
    pub fn growth(&self) -> f64 {
        self.winter_score - self.fall_score
    }
}

// =============================================================================
// CSV Format
// =============================================================================

/// Layout of an uploaded CSV file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CsvFormat {
    /// `testWindow,score,hours` - one row per observation, pivoted on hours.
    Long,
    /// `hours,fallScore,winterScore` - one row per student.
    #[default]
    Wide,
}

impl CsvFormat {
    /// Column names in file order, used in error messages.
    pub fn columns(&self) -> [&'static str; 3] {
        match self {
            CsvFormat::Long => ["testWindow", "score", "hours"],
            CsvFormat::Wide => ["hours", "fallScore", "winterScore"],
        }
    }

    /// Human-readable description of the expected columns.
    pub fn description(&self) -> &'static str {
        match self {
            CsvFormat::Long => "Test window (fall or winter), score, hours spent on program",
            CsvFormat::Wide => "Hours spent on program, fall score, winter score",
        }
    }
}

impl FromStr for CsvFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" => Ok(CsvFormat::Long),
            "wide" => Ok(CsvFormat::Wide),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CsvFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvFormat::Long => f.write_str("long"),
            CsvFormat::Wide => f.write_str("wide"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_parse_is_case_insensitive() {
        assert_eq!("Fall".parse::<TestWindow>(), Ok(TestWindow::Fall));
        assert_eq!(" WINTER ".parse::<TestWindow>(), Ok(TestWindow::Winter));
        assert!("Spring".parse::<TestWindow>().is_err());
        assert!("".parse::<TestWindow>().is_err());
    }

    #[test]
    fn test_growth() {
        let record = StudentRecord::new(4.0, 80.0, 72.5);
        assert_eq!(record.growth(), -7.5);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = StudentRecord::new(5.0, 80.0, 85.0);
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["hours"], 5.0);
        assert_eq!(json["fallScore"], 80.0);
        assert_eq!(json["winterScore"], 85.0);
    }

    #[test]
    fn test_format_round_trips_through_str() {
        assert_eq!(CsvFormat::Long.to_string().parse::<CsvFormat>(), Ok(CsvFormat::Long));
        assert_eq!(CsvFormat::default(), CsvFormat::Wide);
    }
}
