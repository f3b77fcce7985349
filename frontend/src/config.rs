//! Application configuration.
//!
//! Centralized constants for the frontend. There is no backend and no
//! runtime configuration; everything the page needs is fixed at build time.

/// Application name, shown in the page title and hero.
pub const APP_NAME: &str = "Student Growth Analysis Tool";

/// Maximum file size for upload (in bytes).
///
/// 5 MB limit; matches the core default.
pub const MAX_FILE_SIZE: usize = growth::DEFAULT_MAX_FILE_SIZE;

/// Value of the file input's `accept` attribute.
pub const ACCEPTED_FILE_TYPES: &str = ".csv,text/csv";

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Scatter chart viewport, in SVG user units.
pub const CHART_WIDTH: f64 = 480.0;
pub const CHART_HEIGHT: f64 = 320.0;

/// Space reserved around the plot area for axes and labels.
pub const CHART_MARGIN: f64 = 40.0;

/// Radius of one scatter point.
pub const POINT_RADIUS: f64 = 4.0;

/// Fill colour of scatter points.
pub const POINT_COLOR: &str = "#2563eb";
