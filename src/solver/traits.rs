//! Stepper trait and method enumeration
//!
//! # Design Philosophy
//!
//! - `Stepper` is the numerical method: one fixed-size step of a scalar ODE
//! - `Method` is the closed set of methods compared by the error study
//!
//! Steppers are unit structs: they hold no state, so a single `'static`
//! instance can be shared by every run.

use std::fmt;

use crate::physics::OdeModel;
use super::methods::{EulerStepper, RK4Stepper};

// =================================================================================================
// Stepper Trait
// =================================================================================================

/// One fixed-size step of an explicit integrator
///
/// Implementations must be pure: no interior mutability, no side effects,
/// identical output for identical input.
///
/// # Example
///
/// ```rust
/// use conv_rs::models::ArctanModel;
/// use conv_rs::solver::{EulerStepper, Stepper};
///
/// let model = ArctanModel::new();
/// // y(0.1) ≈ 2 + 0.1 · f(0, 2) = 2.5
/// let y_next = EulerStepper.step(&model, 0.1, 0.0, 2.0);
/// assert!((y_next - 2.5).abs() < 1e-12);
/// ```
pub trait Stepper: Send + Sync {
    /// Advance y from `x` to `x + h`
    fn step(&self, model: &dyn OdeModel, h: f64, x: f64, y: f64) -> f64;

    /// Human readable method name
    fn name(&self) -> &'static str;

    /// Formal order of global accuracy
    fn order(&self) -> u32;
}

// =================================================================================================
// Method Enumeration
// =================================================================================================

/// Integration methods compared by the error study
///
/// Ordering follows the sweep order (Euler rows first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Forward Euler, first order
    Euler,

    /// Classical four-stage Runge-Kutta, fourth order
    RungeKutta4,
}

impl Method {
    /// Every method, in sweep order
    pub const ALL: [Method; 2] = [Method::Euler, Method::RungeKutta4];

    /// Stateless stepper implementing this method
    pub fn stepper(self) -> &'static dyn Stepper {
        match self {
            Method::Euler => &EulerStepper,
            Method::RungeKutta4 => &RK4Stepper,
        }
    }

    /// Label used in plot legends ("Euler", "Runge-Kutta")
    pub fn label(self) -> &'static str {
        match self {
            Method::Euler => "Euler",
            Method::RungeKutta4 => "Runge-Kutta",
        }
    }

    /// Short identifier used in tables ("euler", "runge")
    pub fn key(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::RungeKutta4 => "runge",
        }
    }

    /// Formal order of global accuracy
    pub fn order(self) -> u32 {
        self.stepper().order()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
