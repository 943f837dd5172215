//! Performance benchmarks for the three schemes
//!
//! Statistical counterpart of the binary's fixed-repetition timing: criterion
//! measures the same 50-step integration of each scheme.
//!
//! # What We're Measuring
//!
//! 1. **Explicit Euler**: `p + hk (1 - p)`, one multiply-add and a subtraction
//! 2. **Taylor order 2**: `p + (1 - p) factor_t2`, same flop count as Euler
//! 3. **Implicit trapezoid**: `(p a + b) / c`, a division replaces the subtraction
//!
//! # Expected Results
//!
//! Euler ≈ Taylor 2, trapezoid slower by the latency of the division.
//! Per step the whole loop is a dependency chain, so latency (not
//! throughput) dominates.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # All scheme benchmarks
//! cargo bench --bench scheme_performance
//!
//! # Only the side-by-side comparison
//! cargo bench --bench scheme_performance comparison
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
use rashevsky_rs::solver::{EulerScheme, Scheme, TaylorScheme, TrapezoidScheme, integrate};

// =================================================================================================
// Helpers
// =================================================================================================

fn default_setup() -> (ModelParameters, RecurrenceCoefficients) {
    let params = ModelParameters::default();
    let coefficients = RecurrenceCoefficients::from_parameters(&params);
    (params, coefficients)
}

/// Scaling of one scheme with the number of steps
fn bench_scheme_steps<S: Scheme>(c: &mut Criterion, group_name: &str, scheme: &S, p0: f64) {
    let mut group = c.benchmark_group(group_name);

    for steps in [50usize, 500, 5_000] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| integrate(scheme, black_box(p0), black_box(steps)));
        });
    }

    group.finish();
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Explicit Euler at 50, 500 and 5000 steps
///
/// Time should scale linearly with the number of steps.
fn benchmark_euler(c: &mut Criterion) {
    let (params, coefficients) = default_setup();
    bench_scheme_steps(c, "Explicit Euler", &EulerScheme::new(&coefficients), params.p0);
}

/// Taylor order 2 at 50, 500 and 5000 steps
fn benchmark_taylor(c: &mut Criterion) {
    let (params, coefficients) = default_setup();
    bench_scheme_steps(c, "Taylor Order 2", &TaylorScheme::new(&coefficients), params.p0);
}

/// Implicit trapezoid at 50, 500 and 5000 steps
fn benchmark_trapezoid(c: &mut Criterion) {
    let (params, coefficients) = default_setup();
    bench_scheme_steps(
        c,
        "Implicit Trapezoid",
        &TrapezoidScheme::new(&coefficients),
        params.p0,
    );
}

/// The three schemes on the reference problem, 50 steps from `p0`
///
/// # Reading Results
///
/// ```text
/// Scheme Comparison/Explicit Euler       Time: [~40 ns]
/// Scheme Comparison/Taylor Order 2       Time: [~40 ns]
/// Scheme Comparison/Implicit Trapezoid   Time: [~90 ns]
/// ```
///
/// Absolute numbers are hardware-dependent; the ratio is what matters.
fn benchmark_scheme_comparison(c: &mut Criterion) {
    let (params, coefficients) = default_setup();
    let mut group = c.benchmark_group("Scheme Comparison");
    group.throughput(Throughput::Elements(params.steps as u64));

    let euler = EulerScheme::new(&coefficients);
    let taylor = TaylorScheme::new(&coefficients);
    let trapezoid = TrapezoidScheme::new(&coefficients);

    group.bench_function(euler.name(), |b| {
        b.iter(|| integrate(&euler, black_box(params.p0), params.steps))
    });
    group.bench_function(taylor.name(), |b| {
        b.iter(|| integrate(&taylor, black_box(params.p0), params.steps))
    });
    group.bench_function(trapezoid.name(), |b| {
        b.iter(|| integrate(&trapezoid, black_box(params.p0), params.steps))
    });

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_euler,
    benchmark_taylor,
    benchmark_trapezoid,
    benchmark_scheme_comparison,
);

criterion_main!(benches);
