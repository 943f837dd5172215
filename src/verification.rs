//! Verification driver
//!
//! Runs the three schemes side by side over one trajectory and compares them
//! with the exact solution.
//!
//! # Algorithm
//!
//! For step index `i = 0..=steps`:
//!
//! 1. if `i` is a multiple of [`ROW_INTERVAL`], record a row
//!    `(i, exact(i), euler, taylor2, trapezoid)`
//! 2. if `i < steps`, advance the three states by one step each
//!
//! All three states start at `p0` and use the shared
//! [`RecurrenceCoefficients`].
//!
//! [`verify_full`] keeps every step instead, for error analysis, plotting and
//! export.

use nalgebra::DVector;

use crate::model::{ModelParameters, RashevskyModel, RecurrenceCoefficients};
use crate::solver::{
    self, EulerScheme, Scheme, SchemeKind, TaylorScheme, Trajectory, TrapezoidScheme,
};

/// A row is recorded every `ROW_INTERVAL` steps
pub const ROW_INTERVAL: usize = 5;

// =================================================================================================
// Verification Rows
// =================================================================================================

/// One row of the verification table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerificationRow {
    /// Step index
    pub step: usize,

    /// Exact solution at this step
    pub exact: f64,

    /// Explicit Euler approximation
    pub euler: f64,

    /// Taylor order 2 approximation
    pub taylor2: f64,

    /// Implicit trapezoid approximation
    pub trapezoid: f64,
}

impl VerificationRow {
    /// Approximation of the given scheme
    pub fn value(&self, kind: SchemeKind) -> f64 {
        match kind {
            SchemeKind::Euler => self.euler,
            SchemeKind::Taylor2 => self.taylor2,
            SchemeKind::Trapezoid => self.trapezoid,
        }
    }

    /// Absolute error of the given scheme against the exact solution
    pub fn error(&self, kind: SchemeKind) -> f64 {
        (self.exact - self.value(kind)).abs()
    }

    /// Absolute errors in [`SchemeKind::ALL`] order
    pub fn errors(&self) -> [f64; 3] {
        SchemeKind::ALL.map(|kind| self.error(kind))
    }

    /// True when every value in the row is finite
    pub fn is_finite(&self) -> bool {
        self.exact.is_finite()
            && self.euler.is_finite()
            && self.taylor2.is_finite()
            && self.trapezoid.is_finite()
    }
}

/// Run the three schemes in lockstep, recording every [`ROW_INTERVAL`]-th step
///
/// # Example
///
/// ```rust
/// use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
/// use rashevsky_rs::verification::run_verification;
///
/// let params = ModelParameters::default();
/// let coefficients = RecurrenceCoefficients::from_parameters(&params);
/// let rows = run_verification(&params, &coefficients);
///
/// assert_eq!(rows.len(), 11);
/// assert_eq!(rows[10].step, 50);
/// ```
pub fn run_verification(
    params: &ModelParameters,
    coefficients: &RecurrenceCoefficients,
) -> Vec<VerificationRow> {
    let model = RashevskyModel::new(*params);
    let euler = EulerScheme::new(coefficients);
    let taylor = TaylorScheme::new(coefficients);
    let trapezoid = TrapezoidScheme::new(coefficients);

    let steps = params.steps;
    let mut rows = Vec::with_capacity(steps / ROW_INTERVAL + 1);

    let (mut pe, mut pt, mut pz) = (params.p0, params.p0, params.p0);

    for i in 0..=steps {
        if i % ROW_INTERVAL == 0 {
            let row = VerificationRow {
                step: i,
                exact: model.exact_at_step(i),
                euler: pe,
                taylor2: pt,
                trapezoid: pz,
            };
            check_row(&row);
            rows.push(row);
        }

        if i < steps {
            pe = euler.step(pe);
            pt = taylor.step(pt);
            pz = trapezoid.step(pz);
        }
    }

    rows
}

/// Log rows that leave the model's valid range
fn check_row(row: &VerificationRow) {
    if !row.is_finite() {
        log::warn!("non-finite value in verification row at step {}", row.step);
        return;
    }

    for kind in SchemeKind::ALL {
        let value = row.value(kind);
        if !(0.0..1.0).contains(&value) {
            log::warn!(
                "{} left [0, 1) at step {}: p = {}",
                kind,
                row.step,
                value
            );
        }
    }
}

// =================================================================================================
// Full Comparison
// =================================================================================================

/// Exact solution and the three scheme trajectories at every step
#[derive(Clone, Debug)]
pub struct ComparisonData {
    /// Parameters of the run
    pub params: ModelParameters,

    /// Time of each step
    pub time_points: Vec<f64>,

    /// Exact solution at each step
    pub exact: DVector<f64>,

    /// One trajectory per scheme, in [`SchemeKind::ALL`] order
    pub trajectories: Vec<Trajectory>,
}

impl ComparisonData {
    /// Number of stored steps
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// True when no step is stored
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Trajectory of the given scheme
    pub fn trajectory(&self, kind: SchemeKind) -> Option<&Trajectory> {
        self.trajectories.iter().find(|t| t.kind == kind)
    }

    /// Absolute error series of the given scheme
    pub fn errors(&self, kind: SchemeKind) -> Option<DVector<f64>> {
        self.trajectory(kind).map(|t| t.abs_errors(&self.exact))
    }

    /// Exact value at the last step
    pub fn exact_final(&self) -> Option<f64> {
        self.exact.as_slice().last().copied()
    }

    /// Check that every series is present and as long as the time axis
    ///
    /// # Errors
    ///
    /// Returns an error for empty data, a missing scheme trajectory or
    /// mismatched lengths.
    pub fn validate(&self) -> Result<(), String> {
        if self.is_empty() {
            return Err("Empty data: comparison contains no steps".to_string());
        }

        if self.exact.len() != self.len() {
            return Err(format!(
                "Data length mismatch: {} time points versus {} exact values",
                self.len(),
                self.exact.len()
            ));
        }

        for kind in SchemeKind::ALL {
            let trajectory = self
                .trajectory(kind)
                .ok_or_else(|| format!("Missing trajectory for {}", kind))?;

            if trajectory.len() != self.len() {
                return Err(format!(
                    "{} length mismatch: {} values versus {} time points",
                    kind,
                    trajectory.len(),
                    self.len()
                ));
            }
        }

        Ok(())
    }

    /// Verification rows every `interval` steps, built from the stored series
    ///
    /// # Errors
    ///
    /// Returns an error if the data does not pass [`ComparisonData::validate`].
    pub fn rows(&self, interval: usize) -> Result<Vec<VerificationRow>, String> {
        self.validate()?;
        let interval = interval.max(1);
        let value = |kind: SchemeKind, i: usize| {
            self.trajectory(kind)
                .and_then(|t| t.value_at(i))
                .unwrap_or(f64::NAN)
        };

        let rows: Vec<VerificationRow> = (0..self.len())
            .step_by(interval)
            .map(|i| VerificationRow {
                step: i,
                exact: self.exact[i],
                euler: value(SchemeKind::Euler, i),
                taylor2: value(SchemeKind::Taylor2, i),
                trapezoid: value(SchemeKind::Trapezoid, i),
            })
            .collect();

        Ok(rows)
    }
}

/// Integrate every scheme over the full trajectory and pair them with the
/// exact solution
///
/// # Errors
///
/// Returns an error if the parameters are invalid or a scheme produces a
/// non-finite value.
pub fn verify_full(
    params: &ModelParameters,
    coefficients: &RecurrenceCoefficients,
) -> Result<ComparisonData, String> {
    params.validate()?;

    let model = RashevskyModel::new(*params);
    let exact = DVector::from_vec(model.exact_series());
    let time_points: Vec<f64> = (0..=params.steps).map(|i| params.time_at(i)).collect();

    let trajectories = SchemeKind::ALL
        .iter()
        .map(|kind| solver::solve_trajectory(&kind.build(coefficients), params))
        .collect::<Result<Vec<_>, _>>()?;

    for trajectory in &trajectories {
        log::debug!(
            "{}: max |error| = {:e}, rms = {:e}",
            trajectory.kind,
            trajectory.max_abs_error(&exact),
            trajectory.rms_error(&exact)
        );
    }

    Ok(ComparisonData {
        params: *params,
        time_points,
        exact,
        trajectories,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
