//! Integration schemes and trajectory drivers
//!
//! # Core Concepts
//!
//! The solver layer separates HOW to integrate from WHAT is integrated:
//!
//! 1. **Model** ([`crate::model`]) - parameters, exact solution, coefficients
//! 2. **Scheme** ([`Scheme`] trait) - one recurrence step `p_n -> p_{n+1}`
//! 3. **Drivers** - [`integrate`] (final value only) and
//!    [`solve_trajectory`] (every step, validated)
//!
//! The same coefficients feed every scheme and both drivers, so a
//! verification trajectory and a benchmark run of the same scheme produce
//! bit-identical values.
//!
//! # Module Organization
//!
//! - **`traits`**: `Scheme`, `SchemeKind`, `Trajectory`
//! - **`methods`**: `EulerScheme`, `TaylorScheme`, `TrapezoidScheme`
//!
//! # Quick Start Example
//!
//! ```rust
//! use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
//! use rashevsky_rs::solver::{integrate, solve_trajectory, TaylorScheme};
//!
//! let params = ModelParameters::default();
//! let coefficients = RecurrenceCoefficients::from_parameters(&params);
//! let taylor = TaylorScheme::new(&coefficients);
//!
//! let trajectory = solve_trajectory(&taylor, &params)?;
//! assert_eq!(trajectory.len(), 51);
//! assert_eq!(trajectory.final_value(), Some(integrate(&taylor, params.p0, params.steps)));
//! # Ok::<(), String>(())
//! ```

mod methods;
mod traits;

pub use methods::{EulerScheme, TaylorScheme, TrapezoidScheme};
pub use traits::{Scheme, SchemeKind, Trajectory};

use nalgebra::DVector;

use crate::model::ModelParameters;

// =================================================================================================
// Drivers
// =================================================================================================

/// Apply `steps` recurrence steps starting from `p0`, return the final value
///
/// This is the inner loop of the benchmark; it stores nothing.
#[inline(always)]
pub fn integrate<S: Scheme + ?Sized>(scheme: &S, p0: f64, steps: usize) -> f64 {
    let mut p = p0;
    for _ in 0..steps {
        p = scheme.step(p);
    }
    p
}

/// Integrate one trajectory, storing the value at every step
///
/// # Errors
///
/// Returns an error if the parameters are invalid or if a non-finite value
/// appears.
pub fn solve_trajectory<S: Scheme + ?Sized>(
    scheme: &S,
    params: &ModelParameters,
) -> Result<Trajectory, String> {
    params.validate()?;

    let steps = params.steps;
    let mut time_points = Vec::with_capacity(steps + 1);
    let mut values = Vec::with_capacity(steps + 1);

    let mut p = params.p0;
    time_points.push(params.time_at(0));
    values.push(p);

    for step in 1..=steps {
        p = scheme.step(p);
        validate_value(p, step)?;

        time_points.push(params.time_at(step));
        values.push(p);
    }

    let mut trajectory = Trajectory::new(scheme.kind(), time_points, DVector::from_vec(values));
    trajectory.add_metadata("scheme", scheme.name());
    trajectory.add_metadata("steps", &steps.to_string());
    trajectory.add_metadata("h", &params.h.to_string());
    trajectory.add_metadata("k", &params.k().to_string());

    Ok(trajectory)
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate a state value for numerical issues
///
/// # Returns
///
/// `Ok(())` if the value is finite, `Err(msg)` naming the step otherwise
///
/// # Example
///
/// ```rust
/// use rashevsky_rs::solver::validate_value;
///
/// assert!(validate_value(0.5, 3).is_ok());
/// assert!(validate_value(f64::NAN, 3).unwrap_err().contains("step 3"));
/// ```
pub fn validate_value(value: f64, step: usize) -> Result<(), String> {
    if value.is_nan() {
        return Err(format!(
            "NaN detected at step {}. This indicates numerical instability.",
            step
        ));
    }

    if value.is_infinite() {
        return Err(format!(
            "Infinity detected at step {}. This indicates numerical overflow; \
             try reducing the step size.",
            step
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
