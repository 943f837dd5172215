//! Visualization of verification results
//!
//! Plots are drawn with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **comparison**: Solution and error panels for the three schemes
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rashevsky_rs::output::visualization::{plot_comparison, PlotConfig};
//!
//! let data = verify_full(&params, &coefficients)?;
//!
//! // Default configuration
//! plot_comparison(&data, "comparison.png", None)?;
//!
//! // Or with a custom caption
//! let config = PlotConfig::default().title("h = 1");
//! plot_comparison(&data, "comparison.svg", Some(&config))?;
//! ```

pub mod comparison;
pub mod config;

pub use comparison::plot_comparison;
pub use config::PlotConfig;
