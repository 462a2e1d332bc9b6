//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ConstantGrowth, ExponentialDecay};
pub use test_helpers::{convergence_ratios, errors_at, reference_table, relative_error};
