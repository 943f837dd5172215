//! Model parameters
//!
//! All parameters are scalar constants fixed for the whole run. The default
//! values are those of the Taller 1 exercise.

use std::fmt;

/// Initial nonconformist proportion (default)
pub const DEFAULT_INITIAL_PROPORTION: f64 = 0.01;

/// Birth rate `b` (default)
pub const DEFAULT_BIRTH_RATE: f64 = 0.02;

/// Death rate `d` (default). Cancels out of dp/dt.
pub const DEFAULT_DEATH_RATE: f64 = 0.015;

/// Fraction `r` of newborns that are nonconformist (default)
pub const DEFAULT_NONCONFORMIST_RATE: f64 = 0.1;

/// Step size `h` in years (default)
pub const DEFAULT_STEP_SIZE: f64 = 1.0;

/// Number of integration steps (default)
pub const DEFAULT_STEPS: usize = 50;

/// Parameters of the Rashevsky model and of its discretisation
///
/// # Fields
///
/// - `p0`: initial proportion, must lie in [0, 1)
/// - `b`, `d`, `r`: population rates (non-negative)
/// - `h`: step size (positive)
/// - `steps`: number of steps of one trajectory
///
/// # Example
///
/// ```rust
/// use rashevsky_rs::model::ModelParameters;
///
/// let params = ModelParameters::default();
/// assert_eq!(params.k(), 0.002);
/// assert_eq!(params.total_time(), 50.0);
///
/// let fine = ModelParameters::default().with_step_size(0.5).with_steps(100);
/// assert!(fine.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelParameters {
    /// Initial proportion p(0)
    pub p0: f64,

    /// Birth rate
    pub b: f64,

    /// Death rate (kept for the physical parameterisation, unused by dp/dt)
    pub d: f64,

    /// Nonconformist fraction of newborns
    pub r: f64,

    /// Step size
    pub h: f64,

    /// Number of steps
    pub steps: usize,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            p0: DEFAULT_INITIAL_PROPORTION,
            b: DEFAULT_BIRTH_RATE,
            d: DEFAULT_DEATH_RATE,
            r: DEFAULT_NONCONFORMIST_RATE,
            h: DEFAULT_STEP_SIZE,
            steps: DEFAULT_STEPS,
        }
    }
}

impl ModelParameters {
    /// Builder pattern: set initial proportion
    pub fn with_initial_proportion(mut self, p0: f64) -> Self {
        self.p0 = p0;
        self
    }

    /// Builder pattern: set the three population rates
    pub fn with_rates(mut self, b: f64, d: f64, r: f64) -> Self {
        self.b = b;
        self.d = d;
        self.r = r;
        self
    }

    /// Builder pattern: set step size
    pub fn with_step_size(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Builder pattern: set number of steps
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Effective growth rate k = r·b
    pub fn k(&self) -> f64 {
        self.r * self.b
    }

    /// Time reached after `steps` steps
    pub fn total_time(&self) -> f64 {
        self.time_at(self.steps)
    }

    /// Time of step `i`, computed from the index to avoid accumulating `h`
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.h
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("p0", self.p0),
            ("b", self.b),
            ("d", self.d),
            ("r", self.r),
            ("h", self.h),
        ];

        for (name, value) in named {
            if !value.is_finite() {
                return Err(format!("Parameter {} is not finite", name));
            }
        }

        if !(0.0..1.0).contains(&self.p0) {
            return Err(format!(
                "Initial proportion must lie in [0, 1), got {}",
                self.p0
            ));
        }

        if self.b < 0.0 || self.d < 0.0 || self.r < 0.0 {
            return Err("Population rates must be non-negative".to_string());
        }

        if self.h <= 0.0 {
            return Err("Step size must be positive".to_string());
        }

        if self.steps == 0 {
            return Err("Steps must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl fmt::Display for ModelParameters {
    /// Parameter line of the report, default float formatting
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "b={} d={} r={} k={} h={}",
            self.b,
            self.d,
            self.r,
            self.k(),
            self.h
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
