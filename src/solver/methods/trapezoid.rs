//! Implicit trapezoid scheme
//!
//! # Mathematical Background
//!
//! The trapezoid (Crank-Nicolson) rule averages the slopes at both ends of
//! the step:
//!
//! ```text
//! p_{n+1} = p_n + (h/2)·[k·(1 - p_n) + k·(1 - p_{n+1})]
//! ```
//!
//! The rule is implicit in `p_{n+1}`, but the model is linear, so it solves
//! in closed form:
//!
//! ```text
//! p_{n+1} = (p_n·(1 - hk/2) + hk) / (1 + hk/2)
//!         = (p_n·a_trap + b_trap) / c_trap
//! ```
//!
//! No nonlinear iteration is performed.
//!
//! # Characteristics
//!
//! - **Order**: second order, global error ~ O(h²)
//! - **Stability**: A-stable, the contraction factor `a_trap / c_trap` stays in
//!   (-1, 1) for every `hk > 0`
//! - **Cost**: one multiplication, one addition and one division per step

use crate::model::RecurrenceCoefficients;
use crate::solver::{Scheme, SchemeKind};

/// Closed-form implicit trapezoid recurrence `p ← (p·a_trap + b_trap) / c_trap`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrapezoidScheme {
    a_trap: f64,
    b_trap: f64,
    c_trap: f64,
}

impl TrapezoidScheme {
    /// Create the scheme from precomputed coefficients
    pub fn new(coefficients: &RecurrenceCoefficients) -> Self {
        Self {
            a_trap: coefficients.a_trap,
            b_trap: coefficients.b_trap,
            c_trap: coefficients.c_trap,
        }
    }
}

impl Scheme for TrapezoidScheme {
    #[inline(always)]
    fn step(&self, p: f64) -> f64 {
        (p * self.a_trap + self.b_trap) / self.c_trap
    }

    fn kind(&self) -> SchemeKind {
        SchemeKind::Trapezoid
    }
}
