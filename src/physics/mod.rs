//! ODE models
//!
//! This module provides the trait every problem studied by conv-rs implements.
//!
//! # Architecture
//!
//! Models are **separate from numerical steppers**:
//! - The model provides the **equation** dy/dx = f(x, y) and its exact solution
//! - The stepper provides the **method** used to advance y by one step
//!
//! This separation allows the same error study to be repeated for any
//! scalar problem with a known closed form.
//!
//! # Implementing a New Model
//!
//! ```rust
//! use conv_rs::physics::{InitialCondition, OdeModel};
//!
//! /// dy/dx = y, y(0) = 1
//! struct Growth;
//!
//! impl OdeModel for Growth {
//!     fn derivative(&self, _x: f64, y: f64) -> f64 { y }
//!     fn exact_solution(&self, x: f64) -> f64 { x.exp() }
//!     fn initial_condition(&self) -> InitialCondition { InitialCondition::new(0.0, 1.0) }
//!     fn name(&self) -> &str { "Exponential growth" }
//! }
//!
//! assert_eq!(Growth.exact_solution(0.0), 1.0);
//! ```
//!
//! # Available Models
//!
//! - [`ArctanModel`](crate::models::ArctanModel): dy/dx = (1+y²)/(1+x²), y(0) = 2

pub mod traits;

pub use traits::{InitialCondition, OdeModel};
