//! CSV export of verification results
//!
//! Writes the exact solution, the three schemes and their absolute errors
//! at every step, in a format readable by spreadsheets, pandas or MATLAB.
//!
//! # Features
//!
//! - **Metadata support**: optional `#` comment header with model parameters
//! - **Customizable**: delimiter, decimal separator, precision
//! - **Validation**: rejects empty series, mismatched lengths, NaN and Inf
//!
//! # Example
//!
//! ```rust,ignore
//! use rashevsky_rs::output::export::{export_comparison_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_parameters(&data.params);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_comparison_csv(&data, "rashevsky.csv", Some(&config))?;
//! ```
//!
//! **Output** (`rashevsky.csv`):
//! ```csv
//! # Rashevsky Model Integration Data
//! # Generated: 2026-10-19T10:00:00+00:00
//! # Model: Rashevsky nonconformist dynamics
//! # p0: 0.01
//! # ...
//! #
//! t,exact,euler,taylor2,trapezoid,err_euler,err_taylor2,err_trapezoid
//! 0.0000000000,0.0100000000,0.0100000000,...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::model::{ModelParameters, RashevskyModel};
use crate::solver::{SchemeKind, Trajectory};
use crate::verification::ComparisonData;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 12,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 10)
    pub precision: usize,

    /// Write error columns in scientific notation (default: true)
    pub scientific_errors: bool,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 10,
            scientific_errors: true,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name
    pub model_name: Option<String>,

    /// Model and discretisation parameters
    pub parameters: Option<ModelParameters>,

    /// Additional custom entries
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing a run with the given parameters
    pub fn from_parameters(params: &ModelParameters) -> Self {
        Self {
            model_name: Some(RashevskyModel::new(*params).name().to_string()),
            parameters: Some(*params),
            custom: Vec::new(),
        }
    }

    /// Add custom entry
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    out: &mut W,
    metadata: &CsvMetadata,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "# Rashevsky Model Integration Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }

    if let Some(params) = &metadata.parameters {
        writeln!(out, "# p0: {}", params.p0)?;
        writeln!(out, "# b: {}", params.b)?;
        writeln!(out, "# d: {}", params.d)?;
        writeln!(out, "# r: {}", params.r)?;
        writeln!(out, "# k: {}", params.k())?;
        writeln!(out, "# h: {}", params.h)?;
        writeln!(out, "# Steps: {}", params.steps)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format a value with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    localize(format!("{:.prec$}", value, prec = config.precision), config)
}

/// Format an error value, scientific if configured
fn format_error(value: f64, config: &CsvConfig) -> String {
    if config.scientific_errors {
        localize(format!("{:.prec$e}", value, prec = config.precision), config)
    } else {
        format_number(value, config)
    }
}

fn localize(formatted: String, config: &CsvConfig) -> String {
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn check_finite(name: &str, series: &[f64]) -> Result<(), Box<dyn Error>> {
    if series.iter().any(|v| !v.is_finite()) {
        return Err(format!("Invalid data: NaN or Inf detected in {} series", name).into());
    }
    Ok(())
}

fn open_writer(
    output_path: &str,
    configuration: &CsvConfig,
) -> Result<BufWriter<File>, Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(output_path)?);

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(&mut writer, metadata)?;
    }

    Ok(writer)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export exact solution, the three schemes and their errors to CSV
///
/// Columns: `t`, `exact`, one per scheme, one error column per scheme.
///
/// # Errors
///
/// - Empty data or missing scheme trajectory
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation or write errors
pub fn export_comparison_csv(
    data: &ComparisonData,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    data.validate()?;

    check_finite("time", &data.time_points)?;
    check_finite("exact", data.exact.as_slice())?;

    let mut trajectories = Vec::with_capacity(SchemeKind::ALL.len());
    for kind in SchemeKind::ALL {
        let trajectory = data
            .trajectory(kind)
            .ok_or_else(|| format!("Missing trajectory for {}", kind))?;

        check_finite(kind.column_header(), trajectory.values.as_slice())?;
        trajectories.push(trajectory);
    }

    let errors: Vec<_> = trajectories
        .iter()
        .map(|t| t.abs_errors(&data.exact))
        .collect();

    // ============================= Write ==================================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let d = configuration.delimiter;

    let mut file = open_writer(output_path, configuration)?;

    writeln!(
        file,
        "t{d}exact{d}euler{d}taylor2{d}trapezoid{d}err_euler{d}err_taylor2{d}err_trapezoid"
    )?;

    for i in 0..data.len() {
        write!(file, "{}", format_number(data.time_points[i], configuration))?;
        write!(file, "{}{}", d, format_number(data.exact[i], configuration))?;

        for trajectory in &trajectories {
            write!(file, "{}{}", d, format_number(trajectory.values[i], configuration))?;
        }
        for error in &errors {
            write!(file, "{}{}", d, format_error(error[i], configuration))?;
        }
        writeln!(file)?;
    }

    file.flush()?;
    Ok(())
}

/// Export a single scheme trajectory to CSV (`t`, `p`)
///
/// # Errors
///
/// - Empty trajectory
/// - NaN or Inf values
/// - File creation or write errors
pub fn export_trajectory_csv(
    trajectory: &Trajectory,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("Empty data: trajectory contains no steps".into());
    }

    if trajectory.time_points.len() != trajectory.len() {
        return Err(format!(
            "Data length mismatch: {} time points versus {} values",
            trajectory.time_points.len(),
            trajectory.len()
        )
        .into());
    }

    check_finite("time", &trajectory.time_points)?;
    check_finite(trajectory.kind.column_header(), trajectory.values.as_slice())?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = open_writer(output_path, configuration)?;

    writeln!(file, "t{}p", configuration.delimiter)?;
    for (t, p) in trajectory.time_points.iter().zip(trajectory.values.iter()) {
        writeln!(
            file,
            "{}{}{}",
            format_number(*t, configuration),
            configuration.delimiter,
            format_number(*p, configuration)
        )?;
    }

    file.flush()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
