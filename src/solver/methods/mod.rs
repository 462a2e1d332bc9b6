//! Fixed-step explicit integrators
//!
//! This module contains the concrete implementations of the
//! [`Stepper`](crate::solver::Stepper) trait.
//!
//! - **[`EulerStepper`]**: Forward Euler
//!   - Order: First-order O(h)
//!   - Cost: 1 function evaluation per step
//!
//! - **[`RK4Stepper`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(h⁴)
//!   - Cost: 4 function evaluations per step
//!
//! Each stepper is a stateless unit struct and can be shared across runs.

pub mod euler;
mod rk4;

pub use euler::EulerStepper;
pub use rk4::RK4Stepper;
