//! Export module for verification results.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use rashevsky_rs::output::export::{export_comparison_csv, export_trajectory_csv};
//!
//! // All schemes and their errors
//! export_comparison_csv(&data, "comparison.csv", None)?;
//!
//! // A single scheme
//! export_trajectory_csv(&trajectory, "euler.csv", None)?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvMetadata, export_comparison_csv, export_trajectory_csv};
