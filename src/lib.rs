//! conv-rs: Error convergence study for fixed-step ODE integrators
//!
//! Integrates the scalar initial value problem
//!
//! ```text
//! dy/dx = (1 + y²) / (1 + x²),   y(0) = 2
//! ```
//!
//! whose exact solution is y(x) = (x + 2) / (1 − 2x), with forward Euler and
//! classical Runge-Kutta over a sweep of step sizes, and measures the
//! absolute error at a few fixed abscissae. The errors are plotted against
//! the grid spacing on log-log axes, where the order of each method shows
//! up as the slope of its curves.
//!
//! # Architecture
//!
//! 1. **Separation of Model and Numerics**
//!    - Models define the equation and its exact solution (what to integrate)
//!    - Steppers advance one step (how to integrate)
//!
//! 2. **Pure sweep, separate rendering**
//!    - [`output::sweep`] builds an immutable [`output::ResultTable`]
//!    - [`output::plot_error_convergence`] only reads it
//!
//! # Quick Start
//!
//! ```rust
//! use conv_rs::models::ArctanModel;
//! use conv_rs::output::sweep;
//! use conv_rs::solver::{ExperimentConfiguration, Method};
//!
//! # fn main() -> conv_rs::error::Result<()> {
//! // 1. Model and configuration (h ∈ {1e-4 … 1e-1}, milestones 0.2, 0.3, 0.4)
//! let model = ArctanModel::new();
//! let config = ExperimentConfiguration::for_model(&model);
//!
//! // 2. Run every method at every step size
//! let table = sweep(&model, &config)?;
//! assert_eq!(table.len(), 20);
//!
//! // 3. Compare
//! let euler = table.for_method(Method::Euler);
//! let rk4 = table.for_method(Method::RungeKutta4);
//! assert!(rk4[6].errors()[0] < euler[6].errors()[0]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Model trait (equations)
//! - [`models`]: Concrete models
//! - [`solver`]: Steppers, configuration and the runner
//! - [`output`]: Sweep, result table and visualization
//! - [`error`]: Error types

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use conv_rs::prelude::*;
    //!
    //! let model = ArctanModel::new();
    //! let config = ExperimentConfiguration::for_model(&model);
    //! assert!(config.validate_for(&model).is_ok());
    //! ```
    pub use crate::error::{ConvError, Result};
    pub use crate::models::ArctanModel;
    pub use crate::output::{plot_error_convergence, sweep, PlotConfig, ResultTable};
    pub use crate::physics::{InitialCondition, OdeModel};
    pub use crate::solver::{
        run,
        EulerStepper,
        ExperimentConfiguration,
        Method,
        RK4Stepper,
        RunOutcome,
        Stepper,
    };
}
