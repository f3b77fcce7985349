//! Analytics over a student record collection.
//!
//! - Correlation: Pearson coefficient of hours vs growth, with labels
//! - Summary: table rows, scatter points, means and display formatting
//!
//! Everything here is a pure function of its input.

pub mod correlation;
pub mod summary;

pub use correlation::{correlate, Correlation, CorrelationResult, Direction, Strength, Undefined};
pub use summary::{
    correlation_lines, format_coefficient, format_value, scatter_points, summarize, table_rows,
    GrowthSummary, ScatterPoint, TableRow, TABLE_HEADERS,
};
