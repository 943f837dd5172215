//! Helper functions for integration tests

#![allow(dead_code)]

use rashevsky_rs::solver::{Scheme, integrate};

use super::ReferenceProblem;

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Absolute error of a scheme at the last step of a problem
pub fn final_error<S: Scheme>(scheme: &S, problem: &ReferenceProblem) -> f64 {
    let value = integrate(scheme, problem.params.p0, problem.params.steps);
    (value - problem.exact_final()).abs()
}

/// Largest absolute error of a scheme over every step of a problem
pub fn max_step_error<S: Scheme>(scheme: &S, problem: &ReferenceProblem) -> f64 {
    let model = problem.model();
    let mut p = problem.params.p0;
    let mut worst: f64 = 0.0;

    for i in 1..=problem.params.steps {
        p = scheme.step(p);
        worst = worst.max((p - model.exact_at_step(i)).abs());
    }

    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
