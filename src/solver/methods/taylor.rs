//! Taylor order 2 scheme
//!
//! # Mathematical Background
//!
//! Truncating the Taylor series of `p(t + h)` after the second-derivative
//! term, with
//!
//! ```text
//! p'  =  k·(1 - p)
//! p'' = -k²·(1 - p)
//! ```
//!
//! gives
//!
//! ```text
//! p_{n+1} = p_n + h·p' + h²/2·p''
//!         = p_n + (1 - p_n)·(h·k - h²·k²/2)
//! ```
//!
//! The bracket is `factor_t2`, precomputed once. The scheme therefore costs
//! exactly as much per step as explicit Euler.
//!
//! # Characteristics
//!
//! - **Order**: second order, global error ~ O(h²)
//! - **Local truncation error**: h³·k³/6 relative to `1 - p`

use crate::model::RecurrenceCoefficients;
use crate::solver::{Scheme, SchemeKind};

/// Taylor order 2 recurrence `p ← p + (1 - p)·factor_t2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaylorScheme {
    factor_t2: f64,
}

impl TaylorScheme {
    /// Create the scheme from precomputed coefficients
    pub fn new(coefficients: &RecurrenceCoefficients) -> Self {
        Self {
            factor_t2: coefficients.factor_t2,
        }
    }
}

impl Scheme for TaylorScheme {
    #[inline(always)]
    fn step(&self, p: f64) -> f64 {
        p + (1.0 - p) * self.factor_t2
    }

    fn kind(&self) -> SchemeKind {
        SchemeKind::Taylor2
    }
}
