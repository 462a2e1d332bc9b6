//! Classical fourth-order Runge-Kutta stepper
//!
//! # Mathematical Background
//!
//! RK4 evaluates the slope four times per step and combines them with
//! Simpson's rule weights:
//!
//! ```text
//! k₁ = f(xₙ,         yₙ)
//! k₂ = f(xₙ + h/2,   yₙ + h·k₁/2)
//! k₃ = f(xₙ + h/2,   yₙ + h·k₂/2)
//! k₄ = f(xₙ + h,     yₙ + h·k₃)
//!
//! yₙ₊₁ = yₙ + h·(k₁ + 2k₂ + 2k₃ + k₄)/6
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Fourth-order accurate (global error ~ O(h⁴))
//! - **Local truncation error**: O(h⁵) per step
//! - **Complexity**: 4 function evaluations per step
//!
//! Halving h divides the error by roughly 16 until round-off (≈1e-14 for this
//! problem) dominates.

use crate::physics::OdeModel;
use crate::solver::Stepper;

/// Classical RK4 stepper
///
/// # Example
///
/// ```rust
/// use conv_rs::models::ArctanModel;
/// use conv_rs::physics::OdeModel;
/// use conv_rs::solver::{RK4Stepper, Stepper};
///
/// let model = ArctanModel::new();
/// let y = RK4Stepper.step(&model, 0.01, 0.0, 2.0);
/// assert!((y - model.exact_solution(0.01)).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Stepper;

impl RK4Stepper {
    /// Create a new RK4 stepper
    ///
    /// ```rust
    /// use conv_rs::solver::{RK4Stepper, Stepper};
    ///
    /// let stepper = RK4Stepper::new();
    /// assert_eq!(stepper.name(), "Runge Kutta (RK4)");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for RK4Stepper {
    fn step(&self, model: &dyn OdeModel, h: f64, x: f64, y: f64) -> f64 {
        let half = h / 2.0;

        // Slope at beginning of interval
        let k1 = model.derivative(x, y);

        // Midpoint slopes, Euler-predicted from k₁ then k₂
        let k2 = model.derivative(x + half, y + half * k1);
        let k3 = model.derivative(x + half, y + half * k2);

        // Slope at end of interval, predicted from k₃
        let k4 = model.derivative(x + h, y + h * k3);

        y + h * (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }

    fn name(&self) -> &'static str {
        "Runge Kutta (RK4)"
    }

    fn order(&self) -> u32 {
        4
    }
}

// =================================================================================================
// Tests
// =================================================================================================
