//! Console report
//!
//! Writes the fixed textual report of the verification run and the
//! benchmark. Every writer takes any [`std::io::Write`] so the report can be
//! sent to stdout or captured in a buffer.
//!
//! # Layout
//!
//! ```text
//! ============================================================
//! Taller 1 - Benchmark Rust
//! Parametros: b=0.02 d=0.015 r=0.1 k=0.002 h=1
//! ============================================================
//!
//! --- Verificacion: solucion en una trayectoria ---
//!     t        Exacta         Euler       Taylor2      Trapecio
//! -------------------------------------------------------------
//!     0    0.01000000    0.01000000    0.01000000    0.01000000
//!   ...
//!
//! ============================================================
//! BENCHMARK (10000000 iteraciones x 50 pasos)
//! ============================================================
//! Euler Explicito  :   0.512345 s  | p(50) = 0.10430065
//!   ...
//! ============================================================
//! TIEMPOS Rust [s]: Euler=0.5123  Taylor2=0.5101  Trapecio=1.2044
//! ```

use std::io::{self, Write};

use crate::benchmark::{BenchmarkConfiguration, BenchmarkResult};
use crate::model::ModelParameters;
use crate::solver::SchemeKind;
use crate::verification::{ComparisonData, VerificationRow};

/// Report title
pub const REPORT_TITLE: &str = "Taller 1 - Benchmark Rust";

/// Width of the `=` rules
pub const BANNER_WIDTH: usize = 60;

/// Width of the `-` divider under the table header
pub const TABLE_WIDTH: usize = 61;

/// Width of the benchmark labels, before the colon
const LABEL_WIDTH: usize = 17;

/// A line of `n` copies of `c`
pub fn rule(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

// =================================================================================================
// Verification Section
// =================================================================================================

/// Title and parameter line between two `=` rules
pub fn write_banner<W: Write>(out: &mut W, params: &ModelParameters) -> io::Result<()> {
    writeln!(out, "{}", rule('=', BANNER_WIDTH))?;
    writeln!(out, "{}", REPORT_TITLE)?;
    writeln!(out, "Parametros: {}", params)?;
    writeln!(out, "{}", rule('=', BANNER_WIDTH))
}

/// Verification table: header, divider and one line per row
///
/// Values are fixed-point with 8 decimals in columns of width 14, the step
/// index in a column of width 5.
pub fn write_verification_table<W: Write>(
    out: &mut W,
    rows: &[VerificationRow],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Verificacion: solucion en una trayectoria ---")?;

    write!(out, "{:>5}{:>14}", "t", "Exacta")?;
    for kind in SchemeKind::ALL {
        write!(out, "{:>14}", kind.column_header())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", rule('-', TABLE_WIDTH))?;

    for row in rows {
        writeln!(
            out,
            "{:>5}{:>14.8}{:>14.8}{:>14.8}{:>14.8}",
            row.step, row.exact, row.euler, row.taylor2, row.trapezoid
        )?;
    }

    Ok(())
}

// =================================================================================================
// Benchmark Section
// =================================================================================================

/// Benchmark section header with iteration and step counts
pub fn write_benchmark_header<W: Write>(
    out: &mut W,
    config: &BenchmarkConfiguration,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule('=', BANNER_WIDTH))?;
    writeln!(
        out,
        "BENCHMARK ({} iteraciones x {} pasos)",
        config.iterations, config.steps
    )?;
    writeln!(out, "{}", rule('=', BANNER_WIDTH))
}

/// One benchmark result line
pub fn write_benchmark_line<W: Write>(
    out: &mut W,
    result: &BenchmarkResult,
    steps: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<width$}: {:>10.6} s  | p({}) = {:.8}",
        result.kind.report_label(),
        result.elapsed_seconds(),
        steps,
        result.final_value,
        width = LABEL_WIDTH
    )
}

/// Closing rule and timing summary at 4 decimals
pub fn write_benchmark_summary<W: Write>(
    out: &mut W,
    results: &[BenchmarkResult],
) -> io::Result<()> {
    writeln!(out, "{}", rule('=', BANNER_WIDTH))?;

    let timings: Vec<String> = results
        .iter()
        .map(|r| format!("{}={:.4}", r.kind.column_header(), r.elapsed_seconds()))
        .collect();

    writeln!(out, "TIEMPOS Rust [s]: {}", timings.join("  "))
}

// =================================================================================================
// Error Analysis
// =================================================================================================

/// Extended table with absolute error columns
pub fn write_error_table<W: Write>(out: &mut W, rows: &[VerificationRow]) -> io::Result<()> {
    let header = format!(
        "{:>4} | {:>12} | {:>12} | {:>12} | {:>12} | {:>10} | {:>10} | {:>10}",
        "t", "Exacta", "Euler", "Taylor 2", "Trapecio", "Err Euler", "Err T2", "Err Trap"
    );

    writeln!(out, "{}", header)?;
    writeln!(out, "{}", rule('-', header.len()))?;

    for row in rows {
        let [e_euler, e_taylor, e_trap] = row.errors();
        writeln!(
            out,
            "{:>4} | {:>12.8} | {:>12.8} | {:>12.8} | {:>12.8} | {:>10.3e} | {:>10.3e} | {:>10.3e}",
            row.step,
            row.exact,
            row.euler,
            row.taylor2,
            row.trapezoid,
            e_euler,
            e_taylor,
            e_trap
        )?;
    }

    Ok(())
}

/// Final values of every scheme with their error against the exact solution
pub fn write_final_summary<W: Write>(out: &mut W, data: &ComparisonData) -> io::Result<()> {
    let Some(exact) = data.exact_final() else {
        return Ok(());
    };

    writeln!(out, "Resumen p({}):", data.params.steps)?;
    writeln!(out, "  {:<9}: {:.10}", "Exacta", exact)?;

    for trajectory in &data.trajectories {
        if let Some(value) = trajectory.final_value() {
            writeln!(
                out,
                "  {:<9}: {:.10}  Error: {:.4e}",
                trajectory.kind.column_header(),
                value,
                (exact - value).abs()
            )?;
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
