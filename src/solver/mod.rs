//! Numerical steppers and the experiment runner
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Model** ([`OdeModel`](crate::physics::OdeModel)) - WHAT to integrate
//!    - Right-hand side f(x, y)
//!    - Exact solution and initial condition
//!
//! 2. **Configuration** ([`ExperimentConfiguration`]) - WHERE to integrate
//!    - Start, exclusive end, swept step sizes, sampled milestones
//!
//! 3. **Stepper** ([`Stepper`] trait) - HOW to advance one step
//!    - [`EulerStepper`], [`RK4Stepper`]
//!
//! 4. **Runner** ([`run`]) - one (stepper, step size) integration
//!    - Returns the errors sampled at the milestones
//!
//! # Module Organization
//!
//! - **`traits`**: `Stepper` trait and `Method` enumeration
//! - **`methods`**: Euler and RK4 implementations
//! - **`config`**: `ExperimentConfiguration`
//! - **`runner`**: `MilestonePlan`, `RunOutcome`, `run`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌──────────────────────────┐
//! │   OdeModel      │   │ ExperimentConfiguration  │
//! └────────┬────────┘   └────────────┬─────────────┘
//!          │                         │
//!          └──────────┬──────────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │ run(stepper, h) │ ← Euler / RK4
//!            └────────┬────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │   RunOutcome    │ ← errors at milestones
//!            └─────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Runs return [`crate::error::Result`]. Common errors:
//! - Invalid configuration (non-positive step, milestone outside range)
//! - Numerical overflow (NaN/Inf in the trajectory)
//! - Sampling the exact solution at its singularity

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod config;
mod runner;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Method, Stepper};

pub use config::{
    ExperimentConfiguration,
    DEFAULT_MILESTONES,
    DEFAULT_STEP_SIZES,
    DEFAULT_X_END,
};

pub use runner::{run, MilestoneCollision, MilestonePlan, RunOutcome, Sample};

pub use methods::{EulerStepper, RK4Stepper};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::{ConvError, Result};

/// Validate a freshly computed value for numerical issues
///
/// NaN arises from 0/0 or Inf − Inf, Inf from overflow; either means the
/// trajectory is no longer usable.
///
/// ```rust,ignore
/// validate_value(y, 42, x)?;  // Validates y after step 42
/// ```
pub(crate) fn validate_value(y: f64, step: usize, x: f64) -> Result<()> {
    if y.is_finite() {
        Ok(())
    } else {
        Err(ConvError::NonFinite { step, x })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
