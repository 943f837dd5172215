//! Verification table and benchmark of the three schemes
//!
//! Prints the report to stdout. Diagnostics go to stderr and are controlled
//! by `RUST_LOG` (default level: `warn`).

use std::io::{self, Write};

use env_logger::Env;

use rashevsky_rs::benchmark::{BenchmarkConfiguration, run_benchmarks};
use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
use rashevsky_rs::report;
use rashevsky_rs::verification::run_verification;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // ====== Configuration ======

    let params = ModelParameters::default();
    params.validate()?;

    let config = BenchmarkConfiguration::default();
    config.validate()?;

    let coefficients = RecurrenceCoefficients::from_parameters(&params);
    log::debug!("coefficients: {:?}", coefficients);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // ====== Verification ======

    report::write_banner(&mut out, &params)?;

    let rows = run_verification(&params, &coefficients);
    report::write_verification_table(&mut out, &rows)?;

    // ====== Benchmark ======

    report::write_benchmark_header(&mut out, &config)?;
    out.flush()?;

    let results = run_benchmarks(&coefficients, params.p0, &config, |result| {
        report::write_benchmark_line(&mut out, result, config.steps)?;
        out.flush()
    })?;

    report::write_benchmark_summary(&mut out, &results)?;
    out.flush()?;

    Ok(())
}
