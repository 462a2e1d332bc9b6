//! Error types for conv-rs
//!
//! The numerical core has a single real failure category (evaluating the
//! exact solution at its pole). The remaining variants cover rejected
//! configurations, NaN/Inf detection during integration and chart output.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConvError>;

/// conv-rs error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvError {
    /// Configuration or run parameters rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Exact solution requested at or beyond its singularity
    #[error("Domain violation: exact solution is undefined at x = {x}")]
    DomainViolation {
        /// Offending abscissa
        x: f64,
    },

    /// NaN or Inf produced during integration
    #[error("Non-finite value at step {step} (x = {x}). Try reducing the step size.")]
    NonFinite {
        /// Step counter at which the value was detected
        step: usize,
        /// Abscissa of the offending state
        x: f64,
    },

    /// Nothing to plot
    #[error("Result table contains no plottable error values")]
    EmptyTable,

    /// Drawing backend failure
    #[error("Plot error: {0}")]
    Plot(String),
}
