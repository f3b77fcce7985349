//! Field and row validation.
//!
//! Every numeric field must be a finite, non-negative real. Checks run in a
//! fixed order per row: all numeric parses first, then the sign checks, then
//! the test window, so the reported reason matches what a user would see
//! when fixing the file one error at a time.
//!
//! # Example
//!
//! ```rust
//! use growth::validation::{parse_entry, validate_wide_row};
//!
//! let record = parse_entry("4.5", "80", "86").unwrap();
//! assert_eq!(record.growth(), 6.0);
//!
//! assert!(validate_wide_row(1, &["3", "-1", "70"]).is_err());
//! ```

use crate::error::{RejectReason, ValidationError, ValidationResult};
use crate::models::{RawObservation, StudentRecord, TestWindow};

/// Number of fields in both CSV layouts.
pub const FIELDS_PER_ROW: usize = 3;

/// Parse one numeric field. Empty, unparsable and non-finite input is
/// `NonNumeric`; the sign is checked separately by [`check_non_negative`].
pub fn parse_number(raw: &str, column: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::new(RejectReason::NonNumeric)
            .with_column(column)
            .with_value(trimmed)),
    }
}

/// Reject values below zero. `-0.0` passes.
pub fn check_non_negative(value: f64, column: &str) -> ValidationResult<f64> {
    if value < 0.0 {
        Err(ValidationError::new(RejectReason::Negative)
            .with_column(column)
            .with_value(value.to_string()))
    } else {
        Ok(value)
    }
}

pub fn parse_test_window(raw: &str, column: &str) -> ValidationResult<TestWindow> {
    raw.parse::<TestWindow>().map_err(|_| {
        ValidationError::new(RejectReason::InvalidTestWindow)
            .with_column(column)
            .with_value(raw.trim())
    })
}

fn check_field_count(fields: &[&str]) -> ValidationResult<()> {
    if fields.len() == FIELDS_PER_ROW {
        Ok(())
    } else {
        Err(ValidationError::new(RejectReason::WrongFieldCount {
            expected: FIELDS_PER_ROW,
            found: fields.len(),
        }))
    }
}

/// Parse all `(raw, column)` pairs, then sign-check them, in order.
fn parse_non_negative<const N: usize>(fields: [(&str, &str); N]) -> ValidationResult<[f64; N]> {
    let mut values = [0.0; N];
    for (slot, (raw, column)) in values.iter_mut().zip(fields.iter()) {
        *slot = parse_number(raw, column)?;
    }
    for (value, (raw, column)) in values.iter().zip(fields.iter()) {
        check_non_negative(*value, column).map_err(|e| e.with_value(raw.trim()))?;
    }
    Ok(values)
}

/// Validate a wide-form row `hours,fallScore,winterScore`.
pub fn validate_wide_row(row: usize, fields: &[&str]) -> ValidationResult<StudentRecord> {
    let validate = || -> ValidationResult<StudentRecord> {
        check_field_count(fields)?;
        let [hours, fall, winter] = parse_non_negative([
            (fields[0], "hours"),
            (fields[1], "fallScore"),
            (fields[2], "winterScore"),
        ])?;
        Ok(StudentRecord::new(hours, fall, winter))
    };
    validate().map_err(|e| e.at_row(row))
}

/// Validate a long-form row `testWindow,score,hours`.
pub fn validate_long_row(row: usize, fields: &[&str]) -> ValidationResult<RawObservation> {
    let validate = || -> ValidationResult<RawObservation> {
        check_field_count(fields)?;
        let [score, hours] = parse_non_negative([(fields[1], "score"), (fields[2], "hours")])?;
        let test_window = parse_test_window(fields[0], "testWindow")?;
        Ok(RawObservation {
            test_window,
            score,
            hours,
        })
    };
    validate().map_err(|e| e.at_row(row))
}

/// Validate the three text fields of the manual entry form.
pub fn parse_entry(hours: &str, fall_score: &str, winter_score: &str) -> ValidationResult<StudentRecord> {
    let [hours, fall, winter] = parse_non_negative([
        (hours, "hours"),
        (fall_score, "fallScore"),
        (winter_score, "winterScore"),
    ])?;
    Ok(StudentRecord::new(hours, fall, winter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_reals() {
        assert_eq!(parse_number(" 12.5 ", "hours").unwrap(), 12.5);
        assert_eq!(parse_number("1e2", "hours").unwrap(), 100.0);
        assert_eq!(parse_number("0", "hours").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for raw in ["", "   ", "abc", "12abc", "NaN", "inf", "-inf"] {
            let err = parse_number(raw, "score").unwrap_err();
            assert_eq!(err.reason, RejectReason::NonNumeric, "input {:?}", raw);
            assert_eq!(err.column.as_deref(), Some("score"));
        }
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        assert!(check_non_negative(-0.0, "hours").is_ok());
        assert!(check_non_negative(-0.1, "hours").is_err());
    }

    #[test]
    fn test_wide_row_valid() {
        let record = validate_wide_row(1, &["3", "70", "75.5"]).unwrap();
        assert_eq!(record, StudentRecord::new(3.0, 70.0, 75.5));
    }

    #[test]
    fn test_wide_row_reports_row_and_column() {
        let err = validate_wide_row(4, &["3", "x", "75"]).unwrap_err();
        assert_eq!(err.row, Some(4));
        assert_eq!(err.reason, RejectReason::NonNumeric);
        assert_eq!(err.column.as_deref(), Some("fallScore"));
        assert_eq!(err.value.as_deref(), Some("x"));
    }

    #[test]
    fn test_non_numeric_wins_over_negative() {
        // hours is negative but winter does not parse: parse errors come first
        let err = validate_wide_row(1, &["-2", "70", "oops"]).unwrap_err();
        assert_eq!(err.reason, RejectReason::NonNumeric);
    }

    #[test]
    fn test_wide_row_field_count() {
        let err = validate_wide_row(2, &["3", "70"]).unwrap_err();
        assert_eq!(err.reason, RejectReason::WrongFieldCount { expected: 3, found: 2 });
        assert_eq!(err.row, Some(2));
    }

    #[test]
    fn test_negative_keeps_the_typed_text() {
        let err = validate_wide_row(2, &["3", " -0.50 ", "75"]).unwrap_err();
        assert_eq!(err.reason, RejectReason::Negative);
        assert_eq!(err.value.as_deref(), Some("-0.50"));

        let err = parse_entry("-1e1", "50", "60").unwrap_err();
        assert_eq!(err.value.as_deref(), Some("-1e1"));
    }

    #[test]
    fn test_long_row_valid() {
        let obs = validate_long_row(1, &["Winter", "85", "5"]).unwrap();
        assert_eq!(obs.test_window, TestWindow::Winter);
        assert_eq!(obs.score, 85.0);
        assert_eq!(obs.hours, 5.0);
    }

    #[test]
    fn test_long_row_invalid_window() {
        let err = validate_long_row(3, &["Spring", "85", "5"]).unwrap_err();
        assert_eq!(err.reason, RejectReason::InvalidTestWindow);
        assert_eq!(err.row, Some(3));
        assert_eq!(err.value.as_deref(), Some("Spring"));
    }

    #[test]
    fn test_long_row_numbers_checked_before_window() {
        let err = validate_long_row(1, &["Spring", "-1", "5"]).unwrap_err();
        assert_eq!(err.reason, RejectReason::Negative);
        assert_eq!(err.column.as_deref(), Some("score"));
    }

    #[test]
    fn test_entry() {
        let record = parse_entry("2", "50", "60").unwrap();
        assert_eq!(record.growth(), 10.0);

        let err = parse_entry("2", "", "60").unwrap_err();
        assert_eq!(err.reason, RejectReason::NonNumeric);
        assert_eq!(err.row, None);

        let err = parse_entry("2", "50", "-60").unwrap_err();
        assert_eq!(err.reason, RejectReason::Negative);
        assert_eq!(err.column.as_deref(), Some("winterScore"));
    }
}
