//! Precomputed recurrence coefficients
//!
//! Every scheme reduces to a fixed-coefficient linear recurrence for this
//! model. The coefficients depend only on `(h, k)` and are computed once,
//! then shared by the verification run and the benchmark.
//!
//! ```text
//! hk        = h·k
//! factor_t2 = hk - 0.5·h·h·k·k
//! hk2       = hk / 2
//! a_trap    = 1 - hk2
//! b_trap    = hk
//! c_trap    = 1 + hk2
//! ```
//!
//! The trapezoid coefficients come from solving the implicit rule
//! `p_{n+1} = p_n + (hk/2)·[(1 - p_n) + (1 - p_{n+1})]` for `p_{n+1}`.

use crate::model::ModelParameters;

/// Coefficients of the three recurrences
///
/// Each field is evaluated with exactly the operation order shown in the
/// module documentation, since rounding depends on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecurrenceCoefficients {
    /// Euler increment factor h·k
    pub hk: f64,

    /// Taylor order 2 increment factor
    pub factor_t2: f64,

    /// Half of h·k
    pub hk2: f64,

    /// Trapezoid numerator factor on p
    pub a_trap: f64,

    /// Trapezoid numerator constant
    pub b_trap: f64,

    /// Trapezoid denominator
    pub c_trap: f64,
}

impl RecurrenceCoefficients {
    /// Derive coefficients from step size `h` and rate `k`
    ///
    /// # Example
    ///
    /// ```rust
    /// use rashevsky_rs::model::RecurrenceCoefficients;
    ///
    /// let c = RecurrenceCoefficients::new(1.0, 0.002);
    /// assert_eq!(c.hk, 0.002);
    /// assert_eq!(c.b_trap, c.hk);
    /// ```
    pub fn new(h: f64, k: f64) -> Self {
        let hk = h * k;
        let factor_t2 = hk - 0.5 * h * h * k * k;
        let hk2 = hk / 2.0;

        Self {
            hk,
            factor_t2,
            hk2,
            a_trap: 1.0 - hk2,
            b_trap: hk,
            c_trap: 1.0 + hk2,
        }
    }

    /// Derive coefficients from model parameters
    pub fn from_parameters(params: &ModelParameters) -> Self {
        let coefficients = Self::new(params.h, params.k());

        log::debug!(
            "recurrence coefficients: hk={} factor_t2={} a_trap={} b_trap={} c_trap={}",
            coefficients.hk,
            coefficients.factor_t2,
            coefficients.a_trap,
            coefficients.b_trap,
            coefficients.c_trap
        );

        coefficients
    }
}

// =================================================================================================
// Tests
// =================================================================================================
