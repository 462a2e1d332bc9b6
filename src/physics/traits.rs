//! Scalar ODE model traits and types
//!
//! This module defines the core API for the problems studied by conv-rs:
//! - `OdeModel`: trait for scalar initial value problems with a known exact solution
//! - `InitialCondition`: the (x₀, y₀) pair a run starts from

// =================================================================================================
// Initial Condition
// =================================================================================================

/// Starting point (x₀, y₀) of an integration
///
/// # Example
/// ```
/// use conv_rs::physics::InitialCondition;
///
/// let initial = InitialCondition::new(0.0, 2.0);
/// assert_eq!(initial.x, 0.0);
/// assert_eq!(initial.y, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialCondition {
    /// Independent variable at the start of integration
    pub x: f64,

    /// Solution value at `x`
    pub y: f64,
}

impl InitialCondition {
    /// Create an initial condition
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// =================================================================================================
// ODE Model Trait
// =================================================================================================

/// Scalar ordinary differential equation dy/dx = f(x, y) with a closed-form solution
///
/// # Design
///
/// The model provides the **equation** (what to integrate) while the steppers in
/// [`crate::solver`] provide the **method**. The exact solution is part of the
/// model so that a run can measure its own error.
///
/// Both functions must be pure: steppers may call `derivative` several times per
/// step and rely on getting identical results for identical inputs.
pub trait OdeModel: Send + Sync {
    /// Right-hand side f(x, y) of dy/dx = f(x, y)
    fn derivative(&self, x: f64, y: f64) -> f64;

    /// Closed-form solution y(x) satisfying the model's initial condition
    ///
    /// Undefined at [`singularity`](OdeModel::singularity) if the model has one;
    /// callers must never sample it there.
    fn exact_solution(&self, x: f64) -> f64;

    /// Initial condition (x₀, y₀)
    fn initial_condition(&self) -> InitialCondition;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Abscissa at which the exact solution blows up, if any
    fn singularity(&self) -> Option<f64> {
        None
    }
}
