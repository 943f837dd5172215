//! rashevsky-rs: one-step schemes for the Rashevsky nonconformist model
//!
//! The model describes the proportion `p(t)` of nonconformists in a
//! population:
//!
//! ```text
//! dp/dt = k (1 - p),   k = r · b,   p(0) = p0
//! p(t)  = 1 - (1 - p0) · exp(-k t)
//! ```
//!
//! Three one-step schemes are compared against the exact solution and
//! timed against each other:
//!
//! | Scheme             | Recurrence                                 | Order |
//! |--------------------|--------------------------------------------|-------|
//! | Explicit Euler     | `p + hk (1 - p)`                           | 1     |
//! | Taylor order 2     | `p + (1 - p) (hk - h²k²/2)`                | 2     |
//! | Implicit trapezoid | `(p (1 - hk/2) + hk) / (1 + hk/2)`         | 2     |
//!
//! # Architecture
//!
//! 1. **Separation of model and numerics**
//!    - [`model`] holds the parameters, the exact solution and the
//!      precomputed recurrence coefficients
//!    - [`solver`] holds the schemes and the integration drivers
//!
//! 2. **Two consumers of the same schemes**
//!    - [`verification`] runs the schemes in lockstep and compares them
//!      with the exact solution
//!    - [`benchmark`] times millions of short integrations per scheme
//!
//! # Quick Start
//!
//! ```rust
//! use rashevsky_rs::model::{ModelParameters, RecurrenceCoefficients};
//! use rashevsky_rs::verification::run_verification;
//!
//! let params = ModelParameters::default();
//! let coefficients = RecurrenceCoefficients::from_parameters(&params);
//!
//! for row in run_verification(&params, &coefficients) {
//!     assert!(row.taylor2 <= 1.0);
//! }
//! ```
//!
//! # Modules
//!
//! - [`model`]: Parameters, exact solution, coefficients
//! - [`solver`]: Schemes and drivers
//! - [`verification`]: Lockstep comparison with the exact solution
//! - [`benchmark`]: Timing driver
//! - [`report`]: Console report
//! - [`output`]: Figures and CSV export

pub mod benchmark;
pub mod model;
pub mod output;
pub mod report;
pub mod solver;
pub mod verification;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use rashevsky_rs::prelude::*;
    //! ```
    pub use crate::benchmark::{BenchmarkConfiguration, BenchmarkResult, run_benchmarks};
    pub use crate::model::{ModelParameters, RashevskyModel, RecurrenceCoefficients};
    pub use crate::solver::{
        EulerScheme, Scheme, SchemeKind, TaylorScheme, Trajectory, TrapezoidScheme, integrate,
        solve_trajectory,
    };
    pub use crate::verification::{ComparisonData, VerificationRow, run_verification, verify_full};
}
