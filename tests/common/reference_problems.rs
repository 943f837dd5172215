//! Parameter sets with known behaviour
//!
//! Every problem has the closed-form solution `p(t) = 1 - (1 - p0)·exp(-k t)`,
//! so any scheme can be checked against it at every step.

#![allow(dead_code)]

use rashevsky_rs::model::{ModelParameters, RashevskyModel, RecurrenceCoefficients};

/// A named parameter set
pub struct ReferenceProblem {
    pub label: &'static str,
    pub params: ModelParameters,
}

impl ReferenceProblem {
    /// The reference run: b=0.02, r=0.1, h=1, 50 steps (k = 0.002)
    pub fn reference() -> Self {
        Self {
            label: "reference",
            params: ModelParameters::default(),
        }
    }

    /// Fast growth with k = 0.5 over `t ∈ [0, 10]`, split in `steps` steps
    ///
    /// With the reference `k` the per-step error is too small to measure
    /// convergence orders against rounding, hence the larger rate.
    pub fn fast_growth(steps: usize) -> Self {
        Self {
            label: "fast growth",
            params: ModelParameters::default()
                .with_rates(0.5, 0.0, 1.0)
                .with_step_size(10.0 / steps as f64)
                .with_steps(steps),
        }
    }

    /// Step so large that `h·k > 2`: Euler overshoots 1 and oscillates
    pub fn oversized_step() -> Self {
        Self {
            label: "oversized step",
            params: ModelParameters::default()
                .with_rates(1.5, 0.0, 1.0)
                .with_step_size(2.0)
                .with_steps(10),
        }
    }

    pub fn coefficients(&self) -> RecurrenceCoefficients {
        RecurrenceCoefficients::from_parameters(&self.params)
    }

    pub fn model(&self) -> RashevskyModel {
        RashevskyModel::new(self.params)
    }

    /// Exact solution at the last step
    pub fn exact_final(&self) -> f64 {
        self.model().exact_at_step(self.params.steps)
    }
}
