//! Concrete integration schemes
//!
//! This module contains the implementations of the [`Scheme`](crate::solver::Scheme)
//! trait. For the linear model `dp/dt = k·(1 - p)` each scheme collapses to a
//! fixed-coefficient recurrence, evaluated from precomputed
//! [`RecurrenceCoefficients`](crate::model::RecurrenceCoefficients).
//!
//! # Available Methods
//!
//! | Scheme               | Update                          | Order | Cost per step     |
//! |----------------------|---------------------------------|-------|-------------------|
//! | [`EulerScheme`]      | `p + hk·(1 - p)`                | 1     | 1 sub, 1 mul, 1 add |
//! | [`TaylorScheme`]     | `p + (1 - p)·factor_t2`         | 2     | 1 sub, 1 mul, 1 add |
//! | [`TrapezoidScheme`]  | `(p·a_trap + b_trap) / c_trap`  | 2     | 1 mul, 1 add, 1 div |
//!
//! Taylor order 2 costs the same as Euler once `factor_t2` is precomputed.
//! The trapezoid pays a division instead of a subtraction.
//!
//! # Example
//!
//! ```rust
//! use rashevsky_rs::model::RecurrenceCoefficients;
//! use rashevsky_rs::solver::{EulerScheme, Scheme, TrapezoidScheme};
//!
//! let coefficients = RecurrenceCoefficients::new(1.0, 0.002);
//! let euler = EulerScheme::new(&coefficients);
//! let trapezoid = TrapezoidScheme::new(&coefficients);
//!
//! assert!(euler.step(0.01) > 0.01);
//! assert!(trapezoid.step(0.01) > 0.01);
//! ```

mod euler;
mod taylor;
mod trapezoid;

pub use euler::EulerScheme;
pub use taylor::TaylorScheme;
pub use trapezoid::TrapezoidScheme;
