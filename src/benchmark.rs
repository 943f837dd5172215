//! Benchmark driver
//!
//! Times repeated short integrations of each scheme to compare their
//! per-step arithmetic cost.
//!
//! # What We're Measuring
//!
//! For each scheme independently:
//!
//! ```text
//! start clock
//! repeat `iterations` times:
//!     p = p0
//!     repeat `steps` times: p = step(p)
//! stop clock
//! ```
//!
//! Only the last repetition's final value is kept. It is returned (and
//! printed by the report), and each repetition passes through
//! [`std::hint::black_box`], so the optimiser can neither drop the loop nor
//! hoist the pure integration out of it.
//!
//! The clock is [`std::time::Instant`], which is monotonic.
//!
//! # Expected Results
//!
//! Euler and Taylor order 2 perform the same three flops per step once
//! `factor_t2` is precomputed; the trapezoid replaces a subtraction by a
//! division and is expected to be the slowest of the three.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::model::RecurrenceCoefficients;
use crate::solver::{self, EulerScheme, Scheme, SchemeKind, TaylorScheme, TrapezoidScheme};

/// Number of repetitions of the default benchmark
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Steps per repetition of the default benchmark
pub const DEFAULT_BENCHMARK_STEPS: usize = 50;

// =================================================================================================
// Configuration
// =================================================================================================

/// Benchmark size
///
/// # Example
///
/// ```rust
/// use rashevsky_rs::benchmark::BenchmarkConfiguration;
///
/// let config = BenchmarkConfiguration::default();
/// assert_eq!(config.iterations, 10_000_000);
/// assert_eq!(config.steps, 50);
/// assert_eq!(config.total_steps(), 500_000_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkConfiguration {
    /// Number of timed repetitions
    pub iterations: u64,

    /// Recurrence steps per repetition
    pub steps: usize,
}

impl Default for BenchmarkConfiguration {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            steps: DEFAULT_BENCHMARK_STEPS,
        }
    }
}

impl BenchmarkConfiguration {
    /// Create a configuration
    pub fn new(iterations: u64, steps: usize) -> Self {
        Self { iterations, steps }
    }

    /// Total number of recurrence steps per scheme
    pub fn total_steps(&self) -> u64 {
        self.iterations.saturating_mul(self.steps as u64)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("Iterations must be greater than 0".to_string());
        }
        if self.steps == 0 {
            return Err("Steps must be greater than 0".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Results
// =================================================================================================

/// Timing of one scheme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkResult {
    /// Benchmarked scheme
    pub kind: SchemeKind,

    /// Wall-clock time of the whole double loop
    pub elapsed: Duration,

    /// p(steps) of the last repetition
    pub final_value: f64,
}

impl BenchmarkResult {
    /// Elapsed time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Mean time of a single recurrence step, in nanoseconds
    pub fn nanos_per_step(&self, config: &BenchmarkConfiguration) -> f64 {
        match config.total_steps() {
            0 => 0.0,
            total => self.elapsed.as_nanos() as f64 / total as f64,
        }
    }
}

// =================================================================================================
// Drivers
// =================================================================================================

/// Time `config.iterations` integrations of `config.steps` steps from `p0`
///
/// The scheme is taken by generic parameter so `step` is inlined into the
/// timed loop.
pub fn benchmark_scheme<S: Scheme>(
    scheme: &S,
    p0: f64,
    config: &BenchmarkConfiguration,
) -> BenchmarkResult {
    log::debug!(
        "benchmarking {}: {} iterations x {} steps",
        scheme.name(),
        config.iterations,
        config.steps
    );

    let mut final_value = p0;

    let start = Instant::now();
    for _ in 0..config.iterations {
        final_value = black_box(solver::integrate(scheme, black_box(p0), config.steps));
    }
    let elapsed = start.elapsed();

    if elapsed.is_zero() {
        log::warn!(
            "{} benchmark measured zero elapsed time; increase iterations",
            scheme.name()
        );
    }

    log::info!(
        "{} finished in {:.6} s, p({}) = {:.8}",
        scheme.name(),
        elapsed.as_secs_f64(),
        config.steps,
        final_value
    );

    BenchmarkResult {
        kind: scheme.kind(),
        elapsed,
        final_value,
    }
}

/// Benchmark the three schemes in report order
///
/// `on_result` is called after each scheme completes, before the next one
/// starts, so results can be printed as they arrive.
///
/// # Errors
///
/// Stops at the first error returned by `on_result` and returns it.
pub fn run_benchmarks<F, E>(
    coefficients: &RecurrenceCoefficients,
    p0: f64,
    config: &BenchmarkConfiguration,
    mut on_result: F,
) -> Result<Vec<BenchmarkResult>, E>
where
    F: FnMut(&BenchmarkResult) -> Result<(), E>,
{
    let mut results = Vec::with_capacity(SchemeKind::ALL.len());

    for kind in SchemeKind::ALL {
        let result = match kind {
            SchemeKind::Euler => benchmark_scheme(&EulerScheme::new(coefficients), p0, config),
            SchemeKind::Taylor2 => benchmark_scheme(&TaylorScheme::new(coefficients), p0, config),
            SchemeKind::Trapezoid => {
                benchmark_scheme(&TrapezoidScheme::new(coefficients), p0, config)
            }
        };

        on_result(&result)?;
        results.push(result);
    }

    Ok(results)
}

// =================================================================================================
// Tests
// =================================================================================================
