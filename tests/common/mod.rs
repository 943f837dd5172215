//! Common utilities for integration tests

pub mod reference_problems;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use reference_problems::ReferenceProblem;
#[allow(unused_imports)]
pub use test_helpers::{final_error, max_step_error, relative_error};
