//! Mock models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating stepper accuracy away from the arctan problem.

use conv_rs::physics::{InitialCondition, OdeModel};

// =================================================================================================
// Exponential Decay: dy/dx = -k*y
// =================================================================================================

/// Exponential decay model: dy/dx = -k*y, y(0) = 1
///
/// Analytical solution: y(x) = exp(-k*x)
pub struct ExponentialDecay {
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }
}

impl OdeModel for ExponentialDecay {
    fn derivative(&self, _x: f64, y: f64) -> f64 {
        -self.decay_rate * y
    }

    fn exact_solution(&self, x: f64) -> f64 {
        (-self.decay_rate * x).exp()
    }

    fn initial_condition(&self) -> InitialCondition {
        InitialCondition::new(0.0, 1.0)
    }

    fn name(&self) -> &str {
        "ExponentialDecay"
    }
}

// =================================================================================================
// Constant Growth: dy/dx = c
// =================================================================================================

/// Constant growth model: dy/dx = c, y(0) = y0
///
/// Linear solution, integrated exactly (up to round-off) by every method.
pub struct ConstantGrowth {
    pub rate: f64,
    pub y0: f64,
}

impl ConstantGrowth {
    pub fn new(rate: f64, y0: f64) -> Self {
        Self { rate, y0 }
    }
}

impl OdeModel for ConstantGrowth {
    fn derivative(&self, _x: f64, _y: f64) -> f64 {
        self.rate
    }

    fn exact_solution(&self, x: f64) -> f64 {
        self.y0 + self.rate * x
    }

    fn initial_condition(&self) -> InitialCondition {
        InitialCondition::new(0.0, self.y0)
    }

    fn name(&self) -> &str {
        "ConstantGrowth"
    }
}
