//! The Rashevsky nonconformist model
//!
//! This module defines WHAT is integrated: the model parameters, the
//! closed-form solution and the recurrence coefficients that every scheme
//! derives from `(h, k)`.
//!
//! # Mathematical Background
//!
//! The proportion `p` of nonconformists in a population evolves as:
//!
//! ```text
//! dp/dt = r·b·(1 - p) = k·(1 - p)
//! ```
//!
//! The death rate `d` appears in the population balances the model is
//! derived from, but cancels out of the equation for `p`.
//!
//! With `p(0) = p0` the exact solution is:
//!
//! ```text
//! p(t) = 1 - (1 - p0)·exp(-k·t)
//! ```
//!
//! # Organization
//!
//! - **parameters**: [`ModelParameters`], the run constants and their validation
//! - **coefficients**: [`RecurrenceCoefficients`], precomputed scheme factors
//! - **rashevsky**: [`RashevskyModel`], rate law and exact solution

pub mod coefficients;
pub mod parameters;
pub mod rashevsky;

pub use coefficients::RecurrenceCoefficients;
pub use parameters::ModelParameters;
pub use rashevsky::RashevskyModel;
