//! Rate law and closed-form solution of the Rashevsky model

use crate::model::ModelParameters;

/// Rashevsky nonconformist dynamics `dp/dt = k·(1 - p)`
///
/// Holds the parameters and provides the right-hand side of the ODE and its
/// exact solution, used as the reference for every scheme.
///
/// # Example
///
/// ```rust
/// use rashevsky_rs::model::{ModelParameters, RashevskyModel};
///
/// let model = RashevskyModel::new(ModelParameters::default());
/// assert_eq!(model.exact_at_step(0), 1.0 - (1.0 - 0.01));
/// assert!(model.exact_at_step(50) > model.exact_at_step(5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RashevskyModel {
    params: ModelParameters,
}

impl RashevskyModel {
    /// Create the model from its parameters
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Model parameters
    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    /// Model name
    pub fn name(&self) -> &'static str {
        "Rashevsky nonconformist dynamics"
    }

    /// Right-hand side k·(1 - p)
    pub fn rate(&self, p: f64) -> f64 {
        self.params.k() * (1.0 - p)
    }

    /// Exact solution at time `t`
    pub fn exact(&self, t: f64) -> f64 {
        1.0 - (1.0 - self.params.p0) * (-self.params.k() * t).exp()
    }

    /// Exact solution at step `i`, evaluated as `1 - (1-p0)·exp(-k·i·h)`
    pub fn exact_at_step(&self, i: usize) -> f64 {
        let k = self.params.k();
        1.0 - (1.0 - self.params.p0) * (-k * i as f64 * self.params.h).exp()
    }

    /// Exact solution at every step 0..=steps
    pub fn exact_series(&self) -> Vec<f64> {
        (0..=self.params.steps).map(|i| self.exact_at_step(i)).collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
