//! Output of verification results
//!
//! - **Visualization**: PNG/SVG figures using plotters
//! - **Export**: CSV data for external analysis
//!
//! Neither is used by the benchmark binary; both serve the error analysis
//! workflow (see `demos/comparison.rs`).
//!
//! ```text
//! output/
//! ├── mod.rs
//! ├── visualization/
//! │   ├── config.rs
//! │   └── comparison.rs
//! └── export/
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rashevsky_rs::output::{export_comparison_csv, plot_comparison};
//!
//! let data = verify_full(&params, &coefficients)?;
//! plot_comparison(&data, "comparison.png", None)?;
//! export_comparison_csv(&data, "comparison.csv", None)?;
//! ```

pub mod export;
pub mod visualization;

pub use export::{CsvConfig, export_comparison_csv, export_trajectory_csv};
pub use visualization::{PlotConfig, plot_comparison};
