//! Forward Euler stepper
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit scheme for
//!
//! ```text
//! dy/dx = f(x, y)
//! ```
//!
//! It approximates the solution at x_{n+1} = x_n + h using the slope at the
//! start of the interval:
//!
//! ```text
//! y_{n+1} = y_n + h * f(x_n, y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(h))
//! - **Local truncation error**: O(h²) per step
//! - **Complexity**: 1 function evaluation per step
//!
//! # Limitations
//!
//! ⚠️ First-order accuracy only: halving h only halves the error
//! ⚠️ Near the pole at x = 0.5 the error grows quickly (y'' ~ (1 − 2x)⁻³)

use crate::physics::OdeModel;
use crate::solver::Stepper;

// =================================================================================================
// Forward Euler Stepper
// =================================================================================================

/// Forward Euler stepper: y_{n+1} = y_n + h * f(x_n, y_n)
///
/// # Error Analysis
///
/// - **Local truncation error**: O(h²) per step
/// - **Global error**: O(h) after (x_end − x₀)/h steps
/// - **Convergence**: error(h/2) ≈ error(h) / 2
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerStepper;

impl EulerStepper {
    /// Create a new Forward Euler stepper
    ///
    /// # Example
    ///
    /// ```rust
    /// use conv_rs::solver::{EulerStepper, Stepper};
    ///
    /// let stepper = EulerStepper::new();
    /// assert_eq!(stepper.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for EulerStepper {
    fn step(&self, model: &dyn OdeModel, h: f64, x: f64, y: f64) -> f64 {
        y + h * model.derivative(x, y)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }

    fn order(&self) -> u32 {
        1
    }
}

// =================================================================================================
// Tests
// =================================================================================================
