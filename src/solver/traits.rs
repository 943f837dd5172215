//! Scheme traits and types
//!
//! # Design Philosophy
//!
//! - `Scheme` trait: one recurrence step `p_n -> p_{n+1}`, nothing else
//! - `SchemeKind` enum: the closed set of schemes, in report order
//! - `Trajectory`: the values of one scheme at every step, plus metadata
//!
//! The benchmark drives schemes through generics, so `step` is inlined
//! into the timed loop. Dynamic dispatch (`Box<dyn Scheme>`) is only used on
//! paths that are not timed.

use std::collections::HashMap;
use std::fmt;

use nalgebra::DVector;

use crate::model::RecurrenceCoefficients;
use crate::solver::methods::{EulerScheme, TaylorScheme, TrapezoidScheme};

// =================================================================================================
// Scheme Kind
// =================================================================================================

/// The three integration schemes of the study
///
/// # Example
///
/// ```rust
/// use rashevsky_rs::solver::SchemeKind;
///
/// let headers: Vec<_> = SchemeKind::ALL.iter().map(|s| s.column_header()).collect();
/// assert_eq!(headers, ["Euler", "Taylor2", "Trapecio"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Explicit (forward) Euler, first order
    Euler,

    /// Taylor expansion truncated at second order
    Taylor2,

    /// Implicit trapezoid (Crank-Nicolson), second order
    Trapezoid,
}

impl SchemeKind {
    /// All schemes, in the order they are reported and benchmarked
    pub const ALL: [SchemeKind; 3] = [SchemeKind::Euler, SchemeKind::Taylor2, SchemeKind::Trapezoid];

    /// Descriptive name
    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::Euler => "Explicit Euler",
            SchemeKind::Taylor2 => "Taylor Order 2",
            SchemeKind::Trapezoid => "Implicit Trapezoid",
        }
    }

    /// Label of the benchmark result line
    pub fn report_label(&self) -> &'static str {
        match self {
            SchemeKind::Euler => "Euler Explicito",
            SchemeKind::Taylor2 => "Taylor Orden 2",
            SchemeKind::Trapezoid => "Trapecio Impl.",
        }
    }

    /// Header of the verification table column (also the summary label)
    pub fn column_header(&self) -> &'static str {
        match self {
            SchemeKind::Euler => "Euler",
            SchemeKind::Taylor2 => "Taylor2",
            SchemeKind::Trapezoid => "Trapecio",
        }
    }

    /// Order of accuracy (global error ~ O(h^order))
    pub fn order(&self) -> u32 {
        match self {
            SchemeKind::Euler => 1,
            SchemeKind::Taylor2 | SchemeKind::Trapezoid => 2,
        }
    }

    /// Whether the scheme is implicit in p_{n+1}
    pub fn is_implicit(&self) -> bool {
        matches!(self, SchemeKind::Trapezoid)
    }

    /// Build the scheme behind a trait object
    ///
    /// For non-timed code only; the benchmark uses the concrete types.
    pub fn build(&self, coefficients: &RecurrenceCoefficients) -> Box<dyn Scheme> {
        match self {
            SchemeKind::Euler => Box::new(EulerScheme::new(coefficients)),
            SchemeKind::Taylor2 => Box::new(TaylorScheme::new(coefficients)),
            SchemeKind::Trapezoid => Box::new(TrapezoidScheme::new(coefficients)),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =================================================================================================
// Scheme Trait
// =================================================================================================

/// A fixed-coefficient recurrence for `dp/dt = k·(1 - p)`
///
/// Implementations hold their precomputed coefficients and must apply the
/// update in its documented expression form.
pub trait Scheme {
    /// Advance `p` by one step
    fn step(&self, p: f64) -> f64;

    /// Which scheme this is
    fn kind(&self) -> SchemeKind;

    /// Descriptive name
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl<S: Scheme + ?Sized> Scheme for &S {
    #[inline(always)]
    fn step(&self, p: f64) -> f64 {
        (**self).step(p)
    }

    fn kind(&self) -> SchemeKind {
        (**self).kind()
    }
}

impl<S: Scheme + ?Sized> Scheme for Box<S> {
    #[inline(always)]
    fn step(&self, p: f64) -> f64 {
        (**self).step(p)
    }

    fn kind(&self) -> SchemeKind {
        (**self).kind()
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Values of one scheme at every step of a trajectory
///
/// `time_points[i]` and `values[i]` belong to step `i`; step 0 is the
/// initial condition.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// Scheme that produced the values
    pub kind: SchemeKind,

    /// Time of each step
    pub time_points: Vec<f64>,

    /// Approximate proportion at each step
    pub values: DVector<f64>,

    /// Free-form diagnostics (step size, steps, ...)
    pub metadata: HashMap<String, String>,
}

impl Trajectory {
    /// Create a trajectory
    ///
    /// # Panics
    ///
    /// Panics if time points and values differ in length.
    pub fn new(kind: SchemeKind, time_points: Vec<f64>, values: DVector<f64>) -> Self {
        assert_eq!(
            time_points.len(),
            values.len(),
            "Time points and values must have same length"
        );

        Self {
            kind,
            time_points,
            values,
            metadata: HashMap::new(),
        }
    }

    /// Number of stored steps (including the initial condition)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no step is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at step `i`, if stored
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// Value at the last step
    pub fn final_value(&self) -> Option<f64> {
        self.values.as_slice().last().copied()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Absolute error `|reference - value|` at every step
    ///
    /// # Panics
    ///
    /// Panics if the reference has a different length.
    pub fn abs_errors(&self, reference: &DVector<f64>) -> DVector<f64> {
        assert_eq!(
            reference.len(),
            self.values.len(),
            "Reference and trajectory must have same length"
        );
        (reference - &self.values).abs()
    }

    /// Largest absolute error against the reference
    pub fn max_abs_error(&self, reference: &DVector<f64>) -> f64 {
        self.abs_errors(reference).amax()
    }

    /// Root-mean-square error against the reference
    pub fn rms_error(&self, reference: &DVector<f64>) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.abs_errors(reference).norm() / (self.len() as f64).sqrt()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
