//! UI Components for the growth analysis page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - CSV file upload with format selection
//! - [`DataEntryForm`] - Manual entry of one student
//! - [`DataTable`] - All current records
//! - [`GrowthChart`] - Scatter plot and correlation readout
//! - [`LogsPanel`] - Activity log

mod chart;
mod entry;
mod footer;
mod hero;
mod logs;
mod table;
mod upload;

pub use chart::*;
pub use entry::*;
pub use footer::*;
pub use hero::*;
pub use logs::*;
pub use table::*;
pub use upload::*;
