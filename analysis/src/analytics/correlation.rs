//! Pearson correlation between program hours and score growth.
//!
//! ```text
//!                  Σ (h - h̄)(g - ḡ)
//! r = ─────────────────────────────────────
//!      sqrt( Σ (h - h̄)²  ·  Σ (g - ḡ)² )
//! ```
//!
//! with `g = winterScore - fallScore`. Recomputed from scratch for every
//! collection; there is no incremental state.

use serde::Serialize;
use std::fmt;

use crate::models::StudentRecord;

/// Minimum number of records for a coefficient.
pub const MIN_SAMPLES: usize = 2;

/// `|r|` below this is weak.
pub const WEAK_BELOW: f64 = 0.3;

/// `|r|` below this (and not weak) is moderate.
pub const MODERATE_BELOW: f64 = 0.7;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn classify(coefficient: f64) -> Self {
        let magnitude = coefficient.abs();
        if magnitude < WEAK_BELOW {
            Strength::Weak
        } else if magnitude < MODERATE_BELOW {
            Strength::Moderate
        } else {
            Strength::Strong
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => f.write_str("Weak"),
            Strength::Moderate => f.write_str("Moderate"),
            Strength::Strong => f.write_str("Strong"),
        }
    }
}

/// Sign of the coefficient. Zero counts as negative.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn classify(coefficient: f64) -> Self {
        if coefficient > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => f.write_str("positive"),
            Direction::Negative => f.write_str("negative"),
        }
    }
}

/// A defined coefficient with its labels.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CorrelationResult {
    /// In `[-1, 1]`.
    pub coefficient: f64,
    pub strength: Strength,
    pub direction: Direction,
}

impl CorrelationResult {
    fn from_coefficient(coefficient: f64) -> Self {
        Self {
            coefficient,
            strength: Strength::classify(coefficient),
            direction: Direction::classify(coefficient),
        }
    }

    /// e.g. `"Strong positive correlation"`.
    pub fn label(&self) -> String {
        format!("{} {} correlation", self.strength, self.direction)
    }
}

/// Why no coefficient could be computed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Undefined {
    /// Fewer than [`MIN_SAMPLES`] records.
    InsufficientData { count: usize },
    /// All hours, or all growth values, are identical.
    ZeroVariance,
    /// Values too large for the sums to stay finite.
    OutOfRange,
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undefined::InsufficientData { count } => write!(
                f,
                "At least {} students are needed for a correlation ({} so far)",
                MIN_SAMPLES, count
            ),
            Undefined::ZeroVariance => {
                f.write_str("No correlation: hours or growth do not vary across students")
            }
            Undefined::OutOfRange => f.write_str("No correlation: values are too large to compare"),
        }
    }
}

/// Either a coefficient or the reason there is none. An undefined value
/// must never be rendered as a number.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum Correlation {
    Defined(CorrelationResult),
    Undefined(Undefined),
}

impl Correlation {
    pub fn result(&self) -> Option<&CorrelationResult> {
        match self {
            Correlation::Defined(r) => Some(r),
            Correlation::Undefined(_) => None,
        }
    }

    pub fn coefficient(&self) -> Option<f64> {
        self.result().map(|r| r.coefficient)
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Correlation::Defined(_))
    }
}

/// Correlate hours with growth over `records`.
pub fn correlate(records: &[StudentRecord]) -> Correlation {
    if records.len() < MIN_SAMPLES {
        return Correlation::Undefined(Undefined::InsufficientData { count: records.len() });
    }

    // Exact check first: the mean of identical values can drift by an ulp
    // and leave a tiny non-zero sum of squares behind.
    if all_equal(records.iter().map(|r| r.hours)) || all_equal(records.iter().map(StudentRecord::growth)) {
        return Correlation::Undefined(Undefined::ZeroVariance);
    }

    let (Some(hours), Some(growth)) = (
        scaled_deviations(records.iter().map(|r| r.hours)),
        scaled_deviations(records.iter().map(StudentRecord::growth)),
    ) else {
        return Correlation::Undefined(Undefined::OutOfRange);
    };

    let mut cross = 0.0;
    let mut hours_sq = 0.0;
    let mut growth_sq = 0.0;
    for (dh, dg) in hours.iter().zip(growth.iter()) {
        cross += dh * dg;
        hours_sq += dh * dh;
        growth_sq += dg * dg;
    }

    if hours_sq == 0.0 || growth_sq == 0.0 {
        return Correlation::Undefined(Undefined::ZeroVariance);
    }

    let coefficient = cross / (hours_sq * growth_sq).sqrt();
    if !coefficient.is_finite() {
        return Correlation::Undefined(Undefined::OutOfRange);
    }

    Correlation::Defined(CorrelationResult::from_coefficient(coefficient.clamp(-1.0, 1.0)))
}

/// Deviations from the mean, divided by the largest one so every square
/// stays within `[0, 1]`. `None` when the mean or a deviation is not finite.
fn scaled_deviations(values: impl Iterator<Item = f64> + Clone) -> Option<Vec<f64>> {
    let n = values.clone().count() as f64;
    let mean = values.clone().sum::<f64>() / n;
    let deviations: Vec<f64> = values.map(|v| v - mean).collect();

    let scale = deviations.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
    if !scale.is_finite() || deviations.iter().any(|d| !d.is_finite()) {
        return None;
    }
    if scale == 0.0 {
        return Some(deviations);
    }
    Some(deviations.into_iter().map(|d| d / scale).collect())
}

fn all_equal(mut values: impl Iterator<Item = f64>) -> bool {
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}
