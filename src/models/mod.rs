//! Concrete ODE models
//!
//! | Model | Equation | Exact solution |
//! |-------|----------|----------------|
//! | [`ArctanModel`] | dy/dx = (1+y²)/(1+x²), y(0) = 2 | (x+2)/(1−2x) |

pub mod arctan;

pub use arctan::ArctanModel;
