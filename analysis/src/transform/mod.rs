//! Transformation module.
//!
//! - Reshape: long-form observations to per-student records
//! - Pipeline: upload and text ingestion entry points

pub mod pipeline;
pub mod reshape;

pub use pipeline::*;
pub use reshape::{long_to_wide, Reshaped};
