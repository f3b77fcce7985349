//! Presentation-ready views of a record collection.
//!
//! Values stay at full precision; rounding happens only in the `format_*`
//! helpers.

use serde::Serialize;

use super::correlation::Correlation;
use crate::models::StudentRecord;

/// Decimal places for the coefficient.
pub const COEFFICIENT_DECIMALS: usize = 3;

/// Decimal places for hours, scores and growth.
pub const VALUE_DECIMALS: usize = 1;

/// One table row with the derived growth column.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub hours: f64,
    pub fall_score: f64,
    pub winter_score: f64,
    pub growth: f64,
}

impl TableRow {
    /// Cells formatted for display, in column order.
    pub fn cells(&self) -> [String; 4] {
        [
            format_value(self.hours),
            format_value(self.fall_score),
            format_value(self.winter_score),
            format_value(self.growth),
        ]
    }
}

impl From<&StudentRecord> for TableRow {
    fn from(record: &StudentRecord) -> Self {
        Self {
            hours: record.hours,
            fall_score: record.fall_score,
            winter_score: record.winter_score,
            growth: record.growth(),
        }
    }
}

/// Column headers matching [`TableRow::cells`].
pub const TABLE_HEADERS: [&str; 4] = ["Hours Spent", "Fall Score", "Winter Score", "Growth"];

pub fn table_rows(records: &[StudentRecord]) -> Vec<TableRow> {
    records.iter().map(TableRow::from).collect()
}

/// A point of the hours-vs-growth scatter plot.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub hours: f64,
    pub growth: f64,
}

pub fn scatter_points(records: &[StudentRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|r| ScatterPoint {
            hours: r.hours,
            growth: r.growth(),
        })
        .collect()
}

/// Count and means of a collection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSummary {
    pub count: usize,
    /// `None` for an empty collection.
    pub mean_hours: Option<f64>,
    pub mean_growth: Option<f64>,
}

pub fn summarize(records: &[StudentRecord]) -> GrowthSummary {
    let count = records.len();
    let mean = |f: fn(&StudentRecord) -> f64| {
        (count > 0).then(|| records.iter().map(f).sum::<f64>() / count as f64)
    };
    GrowthSummary {
        count,
        mean_hours: mean(|r| r.hours),
        mean_growth: mean(StudentRecord::growth),
    }
}

pub fn format_value(value: f64) -> String {
    format!("{:.*}", VALUE_DECIMALS, value)
}

pub fn format_coefficient(coefficient: f64) -> String {
    format!("{:.*}", COEFFICIENT_DECIMALS, coefficient)
}

/// Headline and detail lines for a correlation, or `None` when undefined.
pub fn correlation_lines(correlation: &Correlation) -> Option<(String, String)> {
    correlation.result().map(|r| {
        (
            format!("Correlation Coefficient: {}", format_coefficient(r.coefficient)),
            r.label(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::correlate;

    #[test]
    fn test_table_rows_derive_growth() {
        let rows = table_rows(&[StudentRecord::new(2.0, 50.0, 60.0), StudentRecord::new(3.5, 71.2, 70.0)]);
        assert_eq!(rows[0].growth, 10.0);
        assert_eq!(rows[1].cells(), ["3.5", "71.2", "70.0", "-1.2"]);
    }

    #[test]
    fn test_scatter_points() {
        let points = scatter_points(&[StudentRecord::new(1.0, 50.0, 45.0)]);
        assert_eq!(points, vec![ScatterPoint { hours: 1.0, growth: -5.0 }]);
    }

    #[test]
    fn test_summary_empty_has_no_means() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_hours, None);
        assert_eq!(summary.mean_growth, None);
    }

    #[test]
    fn test_summary_means() {
        let summary = summarize(&[StudentRecord::new(1.0, 50.0, 50.0), StudentRecord::new(3.0, 50.0, 60.0)]);
        assert_eq!(summary.mean_hours, Some(2.0));
        assert_eq!(summary.mean_growth, Some(5.0));
    }

    #[test]
    fn test_format_precision() {
        assert_eq!(format_value(4.0), "4.0");
        assert_eq!(format_value(12.34), "12.3");
        assert_eq!(format_coefficient(0.98198), "0.982");
        assert_eq!(format_coefficient(-1.0), "-1.000");
    }

    #[test]
    fn test_correlation_lines() {
        let data = [
            StudentRecord::new(1.0, 50.0, 50.0),
            StudentRecord::new(2.0, 50.0, 60.0),
            StudentRecord::new(3.0, 50.0, 80.0),
        ];
        let (headline, detail) = correlation_lines(&correlate(&data)).unwrap();
        assert_eq!(headline, "Correlation Coefficient: 0.982");
        assert_eq!(detail, "Strong positive correlation");

        assert!(correlation_lines(&correlate(&data[..1])).is_none());
    }
}
