//! Arctan addition model
//!
//! # Equation
//!
//! ```text
//! dy/dx = (1 + y²) / (1 + x²),    y(0) = 2
//! ```
//!
//! # Exact Solution
//!
//! The equation is separable: dy/(1+y²) = dx/(1+x²), so arctan y = arctan x + arctan 2.
//! Applying the tangent addition formula:
//!
//! ```text
//! y(x) = tan(arctan x + arctan 2) = (x + 2) / (1 − 2x)
//! ```
//!
//! The solution has a pole at x = 1/2. The error study integrates on [0, 0.5)
//! and never samples the pole.

use crate::physics::{InitialCondition, OdeModel};

/// Default start of integration
pub const X0: f64 = 0.0;

/// Default initial value y(x₀)
pub const Y0: f64 = 2.0;

/// Pole of the exact solution (1 − 2x = 0)
pub const SINGULARITY: f64 = 0.5;

/// dy/dx = (1+y²)/(1+x²) with y(0) = 2
///
/// # Example
///
/// ```rust
/// use conv_rs::models::ArctanModel;
/// use conv_rs::physics::OdeModel;
///
/// let model = ArctanModel::new();
/// assert_eq!(model.exact_solution(0.0), 2.0);
/// assert_eq!(model.derivative(0.0, 2.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArctanModel;

impl ArctanModel {
    /// Create the model
    pub fn new() -> Self {
        Self
    }
}

impl OdeModel for ArctanModel {
    fn derivative(&self, x: f64, y: f64) -> f64 {
        (1.0 + y * y) / (1.0 + x * x)
    }

    fn exact_solution(&self, x: f64) -> f64 {
        (x + 2.0) / (1.0 - 2.0 * x)
    }

    fn initial_condition(&self) -> InitialCondition {
        InitialCondition::new(X0, Y0)
    }

    fn name(&self) -> &str {
        "Arctan addition"
    }

    fn singularity(&self) -> Option<f64> {
        Some(SINGULARITY)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_solution_values() {
        let model = ArctanModel::new();

        for x in [0.0, 0.2, 0.3, 0.4] {
            assert_eq!(model.exact_solution(x), (x + 2.0) / (1.0 - 2.0 * x));
        }

        assert_eq!(model.exact_solution(0.0), 2.0);
        assert_relative_eq!(model.exact_solution(0.2), 11.0 / 3.0, epsilon = 1e-14);
        assert_relative_eq!(model.exact_solution(0.3), 5.75, epsilon = 1e-14);
        assert_relative_eq!(model.exact_solution(0.4), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_solution_is_tangent_sum() {
        let model = ArctanModel::new();

        for x in [0.05_f64, 0.15, 0.25, 0.35, 0.45] {
            let expected = (x.atan() + 2.0_f64.atan()).tan();
            assert_relative_eq!(model.exact_solution(x), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_exact_solution_satisfies_equation() {
        // y'(x) = 5 / (1 − 2x)² must equal f(x, y(x))
        let model = ArctanModel::new();

        for x in [0.0, 0.1, 0.2, 0.3, 0.4] {
            let y = model.exact_solution(x);
            let slope = 5.0 / (1.0 - 2.0 * x).powi(2);
            assert_relative_eq!(model.derivative(x, y), slope, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_exact_solution_blows_up_at_singularity() {
        let model = ArctanModel::new();
        assert!(!model.exact_solution(SINGULARITY).is_finite());
        assert_eq!(model.singularity(), Some(0.5));
    }

    #[test]
    fn test_initial_condition() {
        let model = ArctanModel::new();
        let initial = model.initial_condition();

        assert_eq!(initial, InitialCondition::new(0.0, 2.0));
        assert_eq!(model.exact_solution(initial.x), initial.y);
    }

    #[test]
    fn test_derivative_is_positive() {
        let model = ArctanModel::new();

        for (x, y) in [(0.0, 0.0), (0.5, -3.0), (-1.0, 10.0)] {
            assert!(model.derivative(x, y) > 0.0);
        }
    }
}
