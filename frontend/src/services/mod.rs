//! Browser services.
//!
//! - [`file`] - Reading an uploaded file into memory

pub mod file;

pub use file::*;
